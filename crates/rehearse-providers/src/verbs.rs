//! Dictionary-based verb detection.
//!
//! Recognises a fixed set of common English verbs in their base form, their
//! irregular past forms, and regular `-s`/`-ed`/`-ing` inflections.

use std::collections::HashSet;

const BASE_VERBS: &[&str] = &[
    "accomplish", "achieve", "adapt", "address", "analyze", "apply", "argue", "ask", "assign",
    "automate", "avoid", "balance", "be", "become", "begin", "believe", "build", "change",
    "choose", "coach", "collaborate", "communicate", "complete", "consider", "contribute",
    "coordinate", "create", "debug", "decide", "define", "deliver", "deploy", "design",
    "develop", "discover", "do", "drive", "ensure", "establish", "evaluate", "explain",
    "find", "finish", "fix", "focus", "get", "give", "go", "grow", "handle", "have", "help",
    "identify", "implement", "improve", "increase", "investigate", "know", "launch", "lead",
    "learn", "listen", "make", "manage", "measure", "meet", "mentor", "migrate", "monitor",
    "negotiate", "optimize", "organize", "own", "plan", "prepare", "present", "prioritize",
    "reduce", "refactor", "release", "resolve", "review", "run", "save", "scale", "see",
    "ship", "solve", "start", "support", "take", "teach", "test", "think", "train", "use",
    "want", "work", "write",
];

/// Irregular past forms and their base verb.
const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("built", "build"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("did", "do"),
    ("done", "do"),
    ("does", "do"),
    ("drove", "drive"),
    ("found", "find"),
    ("got", "get"),
    ("gave", "give"),
    ("went", "go"),
    ("gone", "go"),
    ("grew", "grow"),
    ("had", "have"),
    ("has", "have"),
    ("knew", "know"),
    ("led", "lead"),
    ("learnt", "learn"),
    ("made", "make"),
    ("met", "meet"),
    ("ran", "run"),
    ("saw", "see"),
    ("took", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Detects verbs in pre-tokenized, lowercase text.
#[derive(Debug, Clone)]
pub struct VerbDetector {
    base: HashSet<String>,
}

impl Default for VerbDetector {
    fn default() -> Self {
        Self {
            base: BASE_VERBS.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

impl VerbDetector {
    /// Add base-form verbs to the dictionary.
    pub fn with_extra<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.base
            .extend(verbs.into_iter().map(|v| v.as_ref().trim().to_lowercase()));
        self
    }

    /// The tokens that are verbs, in order of appearance.
    pub fn detect(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| self.is_verb(t))
            .cloned()
            .collect()
    }

    pub fn is_verb(&self, token: &str) -> bool {
        if self.base.contains(token) || IRREGULAR.iter().any(|(form, _)| *form == token) {
            return true;
        }
        base_candidates(token).iter().any(|c| self.base.contains(c))
    }
}

/// Possible base forms of a regularly inflected word.
fn base_candidates(token: &str) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(stem) = token.strip_suffix("ied") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            out.push(stem.to_string());
            out.push(format!("{stem}e"));
            // shipped -> ship, planning -> plan
            let mut chars = stem.chars();
            if let (Some(last), Some(prev)) = (chars.next_back(), chars.next_back()) {
                if last == prev {
                    out.push(stem[..stem.len() - last.len_utf8()].to_string());
                }
            }
        }
    }
    if let Some(stem) = token.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix('s') {
        out.push(stem.to_string());
    }

    out.retain(|c| c.len() > 1);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn regular_inflections() {
        let detector = VerbDetector::default();
        for word in [
            "manage", "managed", "managing", "manages", "shipped", "planning", "applied",
            "fixes", "optimized",
        ] {
            assert!(detector.is_verb(word), "{word}");
        }
    }

    #[test]
    fn irregular_forms() {
        let detector = VerbDetector::default();
        for word in ["led", "built", "was", "taught", "went"] {
            assert!(detector.is_verb(word), "{word}");
        }
    }

    #[test]
    fn non_verbs_are_ignored() {
        let detector = VerbDetector::default();
        for word in ["the", "team", "kubernetes", "quickly", "s"] {
            assert!(!detector.is_verb(word), "{word}");
        }
    }

    #[test]
    fn extra_verbs_extend_the_dictionary() {
        let detector = VerbDetector::default().with_extra(["Containerize"]);
        assert!(detector.is_verb("containerized"));
    }

    #[test]
    fn detect_keeps_order() {
        let detector = VerbDetector::default();
        assert_eq!(
            detector.detect(&toks(&["we", "tested", "then", "deployed", "it"])),
            vec!["tested", "deployed"]
        );
    }
}
