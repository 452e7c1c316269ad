#![allow(dead_code)]

use hyponym_detector::data::{AnnotatedDocument, Document, Sentence};

/// One token row: (word, PTB tag, head, dependency label).
/// A `ROOT` label marks the sentence root; its head is ignored.
pub type Row = (&'static str, &'static str, u32, &'static str);

pub fn sentence(rows: &[Row]) -> Sentence {
    let mut edges = Vec::new();
    let mut roots = Vec::new();
    for (i, (_, _, head, dep)) in rows.iter().enumerate() {
        if *dep == "ROOT" {
            roots.push(i as u32);
        } else {
            edges.push((*head, i as u32, dep.to_string()));
        }
    }
    Sentence::from_words(rows.iter().map(|r| r.0))
        .with_tokens("tag", rows.iter().map(|r| r.1))
        .with_dependencies(edges, roots)
}

pub fn document(id: &str, sentences: Vec<Sentence>) -> Document {
    Document::new(id, sentences)
}

pub fn annotated(sentences: Vec<Sentence>) -> AnnotatedDocument {
    AnnotatedDocument::from_document(&document("test", sentences))
}

pub const FIG_TREES: &[Row] = &[
    ("Recognizing", "VBG", 26, "advcl"),
    ("that", "IN", 8, "mark"),
    ("the", "DT", 4, "det"),
    ("preferred", "JJ", 4, "amod"),
    ("habitats", "NNS", 8, "nsubj"),
    ("for", "IN", 4, "prep"),
    ("the", "DT", 7, "det"),
    ("species", "NNS", 5, "pobj"),
    ("are", "VBP", 0, "ccomp"),
    ("in", "IN", 8, "prep"),
    ("the", "DT", 11, "det"),
    ("valleys", "NNS", 9, "pobj"),
    (",", ",", 26, "punct"),
    ("systematic", "JJ", 14, "amod"),
    ("planting", "NN", 26, "nsubj"),
    ("of", "IN", 14, "prep"),
    ("keystone", "JJ", 18, "amod"),
    ("plant", "NN", 18, "compound"),
    ("species", "NNS", 15, "pobj"),
    ("such", "JJ", 20, "amod"),
    ("as", "IN", 18, "prep"),
    ("fig", "NN", 22, "compound"),
    ("trees", "NNS", 20, "pobj"),
    ("(", "-LRB-", 24, "punct"),
    ("Ficus", "NNP", 22, "appos"),
    (")", "-RRB-", 24, "punct"),
    ("creates", "VBZ", 26, "ROOT"),
    ("the", "DT", 29, "det"),
    ("best", "JJS", 29, "amod"),
    ("microhabitats", "NNS", 26, "dobj"),
    (".", ".", 26, "punct"),
];

pub const SARS_OR_OTHER: &[Row] = &[
    ("SARS", "NNP", 6, "nsubj"),
    (",", ",", 0, "punct"),
    ("or", "CC", 0, "cc"),
    ("other", "JJ", 4, "amod"),
    ("coronaviruses", "NNS", 0, "conj"),
    (",", ",", 0, "punct"),
    ("are", "VBP", 6, "ROOT"),
    ("bad", "JJ", 6, "acomp"),
    (".", ".", 6, "punct"),
];

pub const INCLUDING_SARS_AND_MERS: &[Row] = &[
    ("Coronaviruses", "NNS", 7, "nsubj"),
    (",", ",", 0, "punct"),
    ("including", "VBG", 0, "prep"),
    ("SARS", "NNP", 2, "pobj"),
    ("and", "CC", 3, "cc"),
    ("MERS", "NNP", 3, "conj"),
    (",", ",", 0, "punct"),
    ("are", "VBP", 7, "ROOT"),
    ("bad", "JJ", 7, "acomp"),
    (".", ".", 7, "punct"),
];

pub const FOR_EXAMPLE: &[Row] = &[
    ("Fruits", "NNS", 7, "nsubj"),
    (",", ",", 0, "punct"),
    ("for", "IN", 0, "prep"),
    ("example", "NN", 2, "pobj"),
    (",", ",", 0, "punct"),
    ("apples", "NNS", 0, "appos"),
    (",", ",", 0, "punct"),
    ("are", "VBP", 7, "ROOT"),
    ("sweet", "JJ", 7, "acomp"),
    (".", ".", 7, "punct"),
];

pub const POODLES: &[Row] = &[
    ("Poodles", "NNS", 1, "nsubj"),
    ("are", "VBP", 1, "ROOT"),
    ("a", "DT", 3, "det"),
    ("kind", "NN", 1, "attr"),
    ("of", "IN", 3, "prep"),
    ("dog", "NN", 4, "pobj"),
    (".", ".", 1, "punct"),
];

/// The same sentence with a lemma column, as a lemmatizing parser produces it
pub fn including_sars_and_mers() -> Sentence {
    sentence(INCLUDING_SARS_AND_MERS).with_tokens(
        "lemma",
        ["coronavirus", ",", "include", "SARS", "and", "MERS", ",", "be", "bad", "."],
    )
}

pub const INCLUDING_CONLLU: &str = "# newdoc id = coronaviruses
# text = Coronaviruses, including SARS and MERS, are bad.
1\tCoronaviruses\tcoronavirus\tNOUN\tNNS\t_\t8\tnsubj\t_\t_
2\t,\t,\tPUNCT\t,\t_\t1\tpunct\t_\t_
3\tincluding\tinclude\tVERB\tVBG\t_\t1\tprep\t_\t_
4\tSARS\tSARS\tPROPN\tNNP\t_\t3\tpobj\t_\t_
5\tand\tand\tCCONJ\tCC\t_\t4\tcc\t_\t_
6\tMERS\tMERS\tPROPN\tNNP\t_\t4\tconj\t_\t_
7\t,\t,\tPUNCT\t,\t_\t1\tpunct\t_\t_
8\tare\tbe\tAUX\tVBP\t_\t0\tROOT\t_\t_
9\tbad\tbad\tADJ\tJJ\t_\t8\tacomp\t_\t_
10\t.\t.\tPUNCT\t.\t_\t8\tpunct\t_\t_
";
