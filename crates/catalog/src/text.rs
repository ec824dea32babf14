//! TF-IDF text vectorization for product documents.
//!
//! Mirrors the behavior of a standard TF-IDF vectorizer with an English
//! stop-word list: tokens are lowercased runs of two or more alphanumeric
//! characters, IDF uses document-frequency smoothing, and vectors are
//! L2-normalized so cosine similarity reduces to a sparse dot product.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Common English function words excluded from the vocabulary.
const STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "an", "and", "another", "any", "anyhow",
    "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at",
    "back", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides",
    "between", "beyond", "both", "bottom", "but", "by", "call", "can",
    "cannot", "could", "did", "do", "does", "doing", "done", "down", "during",
    "each", "either", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "first", "for", "former", "formerly", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
    "himself", "his", "how", "however", "if", "in", "indeed", "into", "is",
    "it", "its", "itself", "keep", "last", "latter", "latterly", "least",
    "less", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "please", "rather", "same", "see", "seem", "seemed", "seeming", "seems",
    "serious", "several", "she", "should", "since", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "this", "those", "though",
    "through", "throughout", "thus", "to", "together", "too", "top", "toward",
    "towards", "under", "until", "up", "upon", "us", "very", "via", "was",
    "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// A sparse document vector: `(term id, weight)` pairs sorted by term id.
pub(crate) type SparseVector = Vec<(usize, f64)>;

/// Split a document into lowercase tokens of at least two alphanumeric
/// characters, with stop words removed.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_owned)
        .collect()
}

/// Compute L2-normalized TF-IDF vectors for a set of documents.
///
/// The vocabulary is assigned ids in first-occurrence order across the
/// corpus. IDF uses document-frequency smoothing,
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, so no term divides by zero and
/// a term present in every document still carries a uniform unit weight.
/// Documents with no surviving tokens produce an empty (zero-norm) vector.
pub(crate) fn vectorize(documents: &[String]) -> Vec<SparseVector> {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    // Vocabulary and document frequencies.
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();
    for tokens in &tokenized {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokens {
            let next_id = vocabulary.len();
            let id = *vocabulary.entry(token.as_str()).or_insert(next_id);
            if id == document_frequency.len() {
                document_frequency.push(0);
            }
            if seen.insert(token.as_str()) {
                document_frequency[id] += 1;
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let corpus_size = tokenized.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| {
            #[allow(clippy::cast_precision_loss)]
            let df = df as f64;
            ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    tokenized
        .iter()
        .map(|tokens| {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokens {
                let id = vocabulary[token.as_str()];
                *counts.entry(id).or_insert(0.0) += 1.0;
            }

            let mut vector: SparseVector = counts
                .into_iter()
                .map(|(id, tf)| (id, tf * idf[id]))
                .collect();
            vector.sort_unstable_by_key(|&(id, _)| id);

            let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in &mut vector {
                    *w /= norm;
                }
            }
            vector
        })
        .collect()
}

/// Sparse dot product of two sorted vectors.
///
/// Both inputs are L2-normalized, so this is their cosine similarity; either
/// vector being empty (zero norm) yields 0 by construction.
pub(crate) fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Wireless-Mouse, USB 2.0"),
            vec!["wireless", "mouse", "usb"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_char_tokens() {
        assert_eq!(tokenize("a b cd"), vec!["cd"]);
    }

    #[test]
    fn test_tokenize_excludes_stop_words() {
        assert_eq!(
            tokenize("the mouse is on the table"),
            vec!["mouse", "table"]
        );
    }

    #[test]
    fn test_vectorize_identical_documents_have_cosine_one() {
        let docs = vec![
            "ergonomic wireless mouse".to_string(),
            "ergonomic wireless mouse".to_string(),
            "steel kitchen blender".to_string(),
        ];
        let vectors = vectorize(&docs);
        assert!((dot(&vectors[0], &vectors[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vectorize_disjoint_documents_have_cosine_zero() {
        let docs = vec![
            "wireless mouse".to_string(),
            "kitchen blender".to_string(),
        ];
        let vectors = vectorize(&docs);
        assert!(dot(&vectors[0], &vectors[1]).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_stop_word_only_document_is_zero_norm() {
        let docs = vec!["the and of".to_string(), "wireless mouse".to_string()];
        let vectors = vectorize(&docs);
        assert!(vectors[0].is_empty());
        assert!((dot(&vectors[0], &vectors[1])).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vectorize_vectors_are_unit_norm() {
        let docs = vec![
            "wireless mouse with usb receiver".to_string(),
            "wireless keyboard".to_string(),
        ];
        for vector in vectorize(&docs) {
            let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dot_is_symmetric() {
        let docs = vec![
            "wireless ergonomic mouse".to_string(),
            "wireless keyboard and mouse combo".to_string(),
        ];
        let vectors = vectorize(&docs);
        let ab = dot(&vectors[0], &vectors[1]);
        let ba = dot(&vectors[1], &vectors[0]);
        assert!((ab - ba).abs() < f64::EPSILON);
        assert!(ab > 0.0);
    }
}
