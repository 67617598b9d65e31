// Product search - substring filter over the collection
//
// A single linear pass over product names, case-insensitive. The hit carries
// the byte span of the match so the grid can highlight the fragment inline.
// Filtering only selects which cards render; it never changes page geometry.

use crate::catalog::Product;

/// Byte range of the matched fragment within the product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// One product that survived the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    /// Index into the product list.
    pub index: usize,
    /// Highlight span; `None` when the query is empty (everything matches).
    pub span: Option<MatchSpan>,
}

/// Filter products by case-insensitive substring match on the name.
/// An empty (or whitespace-only) query matches everything.
pub fn filter_products(products: &[Product], query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..products.len())
            .map(|index| SearchHit { index, span: None })
            .collect();
    }

    products
        .iter()
        .enumerate()
        .filter_map(|(index, product)| {
            // Product names are ASCII, so byte offsets in the lowercased
            // name line up with the original.
            let start = product.name.to_lowercase().find(&needle)?;
            Some(SearchHit {
                index,
                span: Some(MatchSpan {
                    start,
                    end: start + needle.len(),
                }),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;

    #[test]
    fn empty_query_matches_everything() {
        let hits = filter_products(products(), "");
        assert_eq!(hits.len(), products().len());
        assert!(hits.iter().all(|h| h.span.is_none()));

        let hits = filter_products(products(), "   ");
        assert_eq!(hits.len(), products().len());
    }

    #[test]
    fn match_is_case_insensitive() {
        let hits = filter_products(products(), "LAMP");
        assert!(!hits.is_empty());
        for hit in &hits {
            let name = products()[hit.index].name.to_lowercase();
            assert!(name.contains("lamp"));
        }
    }

    #[test]
    fn span_covers_the_matched_fragment() {
        let hits = filter_products(products(), "ember");
        assert_eq!(hits.len(), 1);
        let hit = hits[0];
        let span = hit.span.unwrap();
        assert_eq!(&products()[hit.index].name[span.start..span.end], "Ember");
    }

    #[test]
    fn no_match_yields_empty_grid() {
        assert!(filter_products(products(), "chandelier").is_empty());
    }

    #[test]
    fn hits_preserve_grid_order() {
        let hits = filter_products(products(), "l");
        for pair in hits.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }
}
