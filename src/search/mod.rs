// src/search/mod.rs
use rayon::prelude::*;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::parse::is_blank;
use crate::table::Record;

/// Decompose, drop combining marks, lowercase, trim.
///
/// `"ALIMENTAÇÃO "` becomes `"alimentacao"`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase().trim_matches(is_blank).to_string()
}

/// Normalized, non-empty query tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split(is_blank)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// All field values joined by a space, normalized.
pub fn haystack(record: &Record) -> String {
    let joined = record.values().collect::<Vec<_>>().join(" ");
    normalize(&joined)
}

/// A tokenized query, reusable across many records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    tokens: Vec<String>,
}

impl Matcher {
    pub fn new(query: &str) -> Self {
        Self {
            tokens: tokenize(query),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the query has no tokens and therefore keeps everything.
    pub fn is_identity(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token must appear somewhere in the record's haystack.
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_identity() {
            return true;
        }
        let hay = haystack(record);
        self.tokens.iter().all(|t| hay.contains(t.as_str()))
    }
}

/// Records matching every token of `query`, in their original order.
///
/// An empty or all-whitespace query returns every record.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    let matcher = Matcher::new(query);
    if matcher.is_identity() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matcher.matches(r))
        .cloned()
        .collect()
}

/// Same result as [`filter`], evaluated across the rayon pool.
pub fn par_filter(records: &[Record], query: &str) -> Vec<Record> {
    let matcher = Matcher::new(query);
    if matcher.is_identity() {
        return records.to_vec();
    }
    records
        .par_iter()
        .filter(|r| matcher.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_default;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    fn sample() -> Vec<Record> {
        vec![
            rec(&[("INSUMO", "ENERGIA ELÉTRICA"), ("GRUPO", "ENERGIA ELÉTRICA")]),
            rec(&[("INSUMO", "CONSUMO DE ÁGUA"), ("GRUPO", "CONSUMO DE ÁGUA")]),
            rec(&[("INSUMO", "TICKET ALIMENTAÇÃO FLASH"), ("GRUPO", "ALIMENTAÇÃO")]),
            rec(&[("INSUMO", "LOCAÇÃO DE GERADOR"), ("GRUPO", "")]),
        ]
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Alimentação "), "alimentacao");
        assert_eq!(normalize("ÁGUA"), "agua");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Energia \t ELÉTRICA\n"), vec!["energia", "eletrica"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_bom_splits_tokens() {
        assert_eq!(tokenize("\u{feff}agua\u{feff}luz"), vec!["agua", "luz"]);
        assert!(tokenize("\u{feff} \u{feff}").is_empty());
        assert!(Matcher::new("\u{feff}").is_identity());
    }

    #[test]
    fn test_matcher_tokens() {
        let m = Matcher::new("  Energia ELÉTRICA ");
        assert_eq!(m.tokens(), ["energia", "eletrica"]);
        assert!(!m.is_identity());
        assert!(m.matches(&rec(&[("A", "ENERGIA ELÉTRICA")])));
        assert!(!m.matches(&rec(&[("A", "ENERGIA SOLAR")])));
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rs = sample();
        assert_eq!(filter(&rs, ""), rs);
        assert_eq!(filter(&rs, "   "), rs);
        assert_eq!(filter(&[], "agua"), Vec::<Record>::new());
    }

    #[test]
    fn test_accent_and_case_insensitive() {
        let r = rec(&[("INSUMO", "Alimentação")]);
        assert_eq!(filter(&[r.clone()], "alimentacao"), vec![r.clone()]);
        assert_eq!(filter(&[r.clone()], "ALIMENTAÇÃO"), vec![r]);
    }

    #[test]
    fn test_tokens_are_conjunctive() {
        let rs = vec![rec(&[("A", "energia eletrica")])];
        assert_eq!(filter(&rs, "eletrica energia").len(), 1);
        assert!(filter(&rs, "eletrica agua").is_empty());
    }

    #[test]
    fn test_substring_not_word_match() {
        let rs = sample();
        let out = filter(&rs, "erad");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("INSUMO"), Some("LOCAÇÃO DE GERADOR"));
    }

    #[test]
    fn test_tokens_match_across_fields() {
        let rs = vec![rec(&[("A", "PNEU"), ("B", "PEÇAS E COMPONENTES")])];
        assert_eq!(filter(&rs, "pecas pneu").len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let rs = sample();
        let out = filter(&rs, "a");
        let positions: Vec<usize> = out
            .iter()
            .map(|r| rs.iter().position(|x| x == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(out.len(), rs.len());
    }

    #[test]
    fn test_par_filter_matches_filter() {
        let rs: Vec<Record> = sample().into_iter().cycle().take(400).collect();
        for q in ["", "agua", "ALIMENTAÇÃO ticket", "energia", "nada"] {
            assert_eq!(par_filter(&rs, q), filter(&rs, q), "query {q:?}");
        }
    }

    #[test]
    fn test_end_to_end() {
        let t = parse_default(
            "INSUMO;GRUPO\nENERGIA ELÉTRICA;ENERGIA ELÉTRICA\nCONSUMO DE ÁGUA;CONSUMO DE ÁGUA\n",
        );
        let out = t.filter("energia");
        assert_eq!(
            out,
            vec![rec(&[
                ("INSUMO", "ENERGIA ELÉTRICA"),
                ("GRUPO", "ENERGIA ELÉTRICA")
            ])]
        );
    }
}
