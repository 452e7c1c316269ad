//! Penn Treebank to Universal POS mapping.
//!
//! Odinson documents usually carry only the fine-grained `tag` field. The
//! detector reasons over universal tags (`NOUN`, `PROPN`, ...), so when a
//! sentence has no `pos` field the coarse tag is derived from `tag`.

/// Map a Penn Treebank tag to its universal POS tag.
///
/// Unknown tags map to `X`.
pub fn universal_pos(tag: &str) -> &'static str {
    match tag {
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "PRP" | "WP" | "EX" => "PRON",
        "PRP$" | "WP$" | "DT" | "PDT" | "WDT" => "DET",
        "JJ" | "JJR" | "JJS" | "AFX" => "ADJ",
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => "VERB",
        "MD" => "AUX",
        "RB" | "RBR" | "RBS" | "WRB" => "ADV",
        "IN" | "RP" => "ADP",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "TO" | "POS" => "PART",
        "UH" => "INTJ",
        "SYM" | "$" | "#" => "SYM",
        "," | "." | ":" | "``" | "''" | "\"" | "-LRB-" | "-RRB-" | "(" | ")" | "HYPH" | "NFP" => "PUNCT",
        _ => "X",
    }
}
