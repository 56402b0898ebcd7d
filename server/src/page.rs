//! Page requests and page bodies for the listing endpoints.
//!
//! # Design
//! `PageParams` is the raw query string shape; every field is optional so the
//! same extractor serves all listing routes. It resolves into a `PageRequest`
//! with defaults applied. `Page<T>` is the response body and keeps the field
//! names existing consumers of this API already read (`content`,
//! `totalElements`, `numberOfElements`, `pageable.pageSize`, ...).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Client;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    #[serde(alias = "asc")]
    Asc,
    #[serde(alias = "desc")]
    Desc,
}

/// Client property a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    #[default]
    Name,
    Cpf,
    Income,
    BirthDate,
    Children,
}

impl SortField {
    fn compare(self, a: &Client, b: &Client) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Cpf => a.cpf.cmp(&b.cpf),
            SortField::Income => a.income.total_cmp(&b.income),
            SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
            SortField::Children => a.children.cmp(&b.children),
        }
    }
}

/// Query parameters shared by every listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<u32>,
    pub lines_per_page: Option<u32>,
    pub direction: Option<Direction>,
    pub order_by: Option<SortField>,
}

/// A resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub direction: Direction,
    pub order_by: SortField,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            direction: Direction::Asc,
            order_by: SortField::Name,
        }
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(0),
            size: params.lines_per_page.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
            direction: params.direction.unwrap_or_default(),
            order_by: params.order_by.unwrap_or_default(),
        }
    }
}

impl PageRequest {
    /// Page size actually applied. A zero `size` is treated as one.
    pub fn page_size(&self) -> u32 {
        self.size.max(1)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size())
    }

    /// Order two rows by the requested field and direction, falling back to
    /// ascending id on ties.
    pub fn compare(&self, a: &Client, b: &Client) -> Ordering {
        let primary = match self.direction {
            Direction::Asc => self.order_by.compare(a, b),
            Direction::Desc => self.order_by.compare(b, a),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortInfo {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

impl SortInfo {
    fn sorted() -> Self {
        Self {
            sorted: true,
            unsorted: false,
            empty: false,
        }
    }

    fn unsorted() -> Self {
        Self {
            sorted: false,
            unsorted: true,
            empty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    pub offset: u64,
    pub paged: bool,
    pub unpaged: bool,
    pub sort: SortInfo,
}

/// One page of results plus the metadata describing where it sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
    pub first: bool,
    pub size: u32,
    pub number: u32,
    pub sort: SortInfo,
    pub number_of_elements: u32,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Wrap `content` (already sliced) as page `request.page` of `total` rows.
    pub fn new(content: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let size = request.page_size();
        let total_pages = total.div_ceil(u64::from(size));
        let number_of_elements = content.len() as u32;
        Self {
            empty: content.is_empty(),
            content,
            pageable: Pageable {
                page_number: request.page,
                page_size: size,
                offset: request.offset(),
                paged: true,
                unpaged: false,
                sort: SortInfo::sorted(),
            },
            total_elements: total,
            total_pages,
            last: u64::from(request.page) + 1 >= total_pages,
            first: request.page == 0,
            size,
            number: request.page,
            sort: SortInfo::sorted(),
            number_of_elements,
        }
    }

    /// A single page holding every element of `content`.
    pub fn unpaged(content: Vec<T>) -> Self {
        let len = content.len() as u32;
        Self {
            empty: content.is_empty(),
            content,
            pageable: Pageable {
                page_number: 0,
                page_size: len,
                offset: 0,
                paged: false,
                unpaged: true,
                sort: SortInfo::unsorted(),
            },
            total_elements: u64::from(len),
            total_pages: 1,
            last: true,
            first: true,
            size: len,
            number: 0,
            sort: SortInfo::unsorted(),
            number_of_elements: len,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
            first: self.first,
            size: self.size,
            number: self.number,
            sort: self.sort,
            number_of_elements: self.number_of_elements,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, income: f64) -> Client {
        Client {
            id,
            name: name.to_string(),
            cpf: String::new(),
            income,
            birth_date: "2000-01-01T00:00:00Z".parse().unwrap(),
            children: 0,
        }
    }

    #[test]
    fn params_default_to_first_page_of_twelve_by_name() {
        let request = PageRequest::from(PageParams::default());
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.size, 12);
        assert_eq!(request.order_by, SortField::Name);
    }

    #[test]
    fn zero_lines_per_page_is_clamped() {
        let request = PageRequest::from(PageParams {
            lines_per_page: Some(0),
            ..PageParams::default()
        });
        assert_eq!(request.size, 1);
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: PageParams =
            serde_json::from_str(r#"{"page":2,"linesPerPage":5,"direction":"DESC","orderBy":"birthDate"}"#)
                .unwrap();
        let request = PageRequest::from(params);
        assert_eq!(request.page, 2);
        assert_eq!(request.size, 5);
        assert_eq!(request.direction, Direction::Desc);
        assert_eq!(request.order_by, SortField::BirthDate);
        assert_eq!(request.offset(), 10);
    }

    #[test]
    fn lowercase_direction_is_accepted() {
        let params: PageParams = serde_json::from_str(r#"{"direction":"desc"}"#).unwrap();
        assert_eq!(params.direction, Some(Direction::Desc));
        let params: PageParams = serde_json::from_str(r#"{"direction":"asc"}"#).unwrap();
        assert_eq!(params.direction, Some(Direction::Asc));
    }

    #[test]
    fn zero_size_request_behaves_as_size_one() {
        let request = PageRequest {
            page: 3,
            size: 0,
            ..PageRequest::default()
        };
        assert_eq!(request.page_size(), 1);
        assert_eq!(request.offset(), 3);
        let page = Page::new(vec![4], &request, 12);
        assert_eq!(page.total_pages, 12);
        assert_eq!(page.size, 1);
        assert_eq!(page.pageable.page_size, 1);
    }

    #[test]
    fn compare_breaks_ties_by_id() {
        let request = PageRequest {
            order_by: SortField::Income,
            direction: Direction::Desc,
            ..PageRequest::default()
        };
        let mut rows = vec![row(2, "b", 10.0), row(1, "a", 10.0), row(3, "c", 20.0)];
        rows.sort_by(|a, b| request.compare(a, b));
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn new_page_computes_metadata() {
        let request = PageRequest {
            page: 2,
            size: 5,
            ..PageRequest::default()
        };
        let page = Page::new(vec![1, 2], &request, 12);
        assert_eq!(page.total_pages, 3);
        assert!(page.last);
        assert!(!page.first);
        assert_eq!(page.number_of_elements, 2);
        assert_eq!(page.pageable.offset, 10);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page: Page<i32> = Page::new(Vec::new(), &PageRequest::default(), 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.empty);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn unpaged_reports_content_length_everywhere() {
        let page = Page::unpaged(vec!["a", "b", "c"]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.number_of_elements, 3);
        assert_eq!(page.pageable.page_size, 3);
        assert!(page.pageable.unpaged);
    }

    #[test]
    fn page_serializes_expected_keys() {
        let json = serde_json::to_value(Page::new(vec![1], &PageRequest::default(), 1)).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["pageable"]["pageSize"], 12);
        assert!(json["content"].is_array());
    }
}
