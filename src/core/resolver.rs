// File: src/core/resolver.rs
use crate::core::candidates::{lemma_candidates, LemmaForms, PlanStep, CANDIDATE_PLAN};
use crate::core::lexicon::Lexicon;
use crate::core::tokenizer::WordTokenizer;
use crate::core::types::{Resolution, ResolvedToken, Token, Translation};
use crate::lemma::Lemmatize;
use crate::provision::Resources;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sentence → sentence translation against a lexicon.
///
/// Each token is resolved on its own: direct lookup, then the lemma plan,
/// then an `[untranslated]` marker.
pub struct Resolver {
    tokenizer: WordTokenizer,
    lemmatizer: Option<Arc<dyn Lemmatize>>,
    plan: Vec<PlanStep>,
    warned_no_lemmatizer: AtomicBool,
}

impl Resolver {
    pub fn new(resources: Resources) -> Self {
        Self {
            tokenizer: resources.tokenizer,
            lemmatizer: resources.lemmatizer,
            plan: CANDIDATE_PLAN.to_vec(),
            warned_no_lemmatizer: AtomicBool::new(false),
        }
    }

    /// Replaces the lemma fallback order.
    pub fn with_plan(mut self, plan: Vec<PlanStep>) -> Self {
        self.plan = plan;
        self
    }

    pub fn has_lemmatizer(&self) -> bool {
        self.lemmatizer.is_some()
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    pub fn translate(&self, lexicon: &Lexicon, sentence: &str) -> String {
        self.resolve(lexicon, sentence).text
    }

    /// Translation together with how every token was resolved.
    pub fn resolve(&self, lexicon: &Lexicon, sentence: &str) -> Translation {
        let lowered = sentence.to_lowercase();
        let tokens: Vec<ResolvedToken> = self
            .tokenizer
            .tokenize(&lowered)
            .into_iter()
            .map(|token| self.resolve_token(lexicon, token))
            .collect();

        let text = tokens
            .iter()
            .map(|t| t.output.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Translation { text, tokens }
    }

    fn resolve_token(&self, lexicon: &Lexicon, token: Token) -> ResolvedToken {
        let source = format!("{}{}{}", token.leading, token.core, token.trailing);
        if token.core.is_empty() {
            return ResolvedToken {
                output: source.clone(),
                source,
                resolution: Resolution::Punctuation,
            };
        }

        let (translation, resolution) = match self.lookup(lexicon, &token.core) {
            Some(found) => found,
            None => (format!("[{}]", token.core), Resolution::Untranslated),
        };
        if resolution == Resolution::Untranslated {
            tracing::debug!("No translation for '{}'", token.core);
        }

        ResolvedToken {
            output: format!("{}{}{}", token.leading, translation, token.trailing),
            source,
            resolution,
        }
    }

    fn lookup(&self, lexicon: &Lexicon, core: &str) -> Option<(String, Resolution)> {
        if let Some(hindi) = non_empty(lexicon.lookup(core)) {
            return Some((hindi.to_string(), Resolution::Direct));
        }

        let Some(lemmatizer) = &self.lemmatizer else {
            if !self.warned_no_lemmatizer.swap(true, Ordering::Relaxed) {
                tracing::warn!("Lemmatizer data not available. Unknown inflected words stay untranslated.");
            }
            return None;
        };

        let forms = LemmaForms::compute(core, lemmatizer.as_ref());
        let mut tried: Vec<&str> = vec![core];
        let candidates = lemma_candidates(core, &forms, &self.plan);
        for candidate in &candidates {
            if tried.contains(&candidate.lemma.as_str()) {
                continue;
            }
            tried.push(&candidate.lemma);
            if let Some(hindi) = non_empty(lexicon.lookup(&candidate.lemma)) {
                tracing::debug!("'{}' resolved via {} lemma '{}'", core, candidate.pos, candidate.lemma);
                return Some((
                    hindi.to_string(),
                    Resolution::Lemma {
                        pos: candidate.pos,
                        lemma: candidate.lemma.clone(),
                    },
                ));
            }
        }
        None
    }
}

/// Empty values count as missing, so an entry added with a blank translation
/// still falls through to the lemma candidates.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::candidates::{Gate, LemmaForm};
    use crate::core::tokenizer::{parse_abbreviations, BUNDLED_ABBREVIATIONS};
    use crate::core::types::PartOfSpeech;
    use crate::lemma::WordNet;
    use std::io;
    use std::sync::Mutex;

    fn wordnet() -> WordNet {
        WordNet::from_sources(
            &[
                (PartOfSpeech::Noun, "dog n\nrun n\nchild n\nhouse n\n"),
                (PartOfSpeech::Verb, "run v\nbe v\nlove v\nmake v\n"),
                (PartOfSpeech::Adjective, "big a\ngood a\n"),
                (PartOfSpeech::Adverb, "here r\n"),
            ],
            &[
                (PartOfSpeech::Noun, "children child\n"),
                (PartOfSpeech::Verb, "running run\nare be\n"),
                (PartOfSpeech::Adjective, "bigger big\n"),
            ],
        )
    }

    fn full() -> Resolver {
        Resolver::new(Resources::new(
            WordTokenizer::treebank(parse_abbreviations(BUNDLED_ABBREVIATIONS)),
            Some(Arc::new(wordnet())),
        ))
    }

    #[test]
    fn direct_lookup_keeps_trailing_punctuation() {
        let out = full().translate(&Lexicon::new(), "Python is powerful language.");
        assert_eq!(out, "पायथन है शक्तिशाली भाषा.");
    }

    #[test]
    fn inflections_resolve_through_lemmas() {
        let mut lexicon = Lexicon::new();
        lexicon.add("dog", "कुत्ता");

        let translation = full().resolve(&lexicon, "Dogs are running.");
        assert_eq!(translation.text, "कुत्ता हैं दौड़ना.");
        assert_eq!(translation.untranslated().count(), 0);
        assert_eq!(translation.tokens[1].resolution, Resolution::Direct);
        assert_eq!(
            translation.tokens[2].resolution,
            Resolution::Lemma {
                pos: PartOfSpeech::Verb,
                lemma: "run".to_string()
            }
        );
    }

    #[test]
    fn unknown_words_are_bracketed() {
        let out = full().translate(&Lexicon::new(), "Zephyr is here.");
        assert_eq!(out, "[zephyr] है यहाँ.");

        let out = full().translate(&Lexicon::new(), "Where is Zephyr?");
        assert_eq!(out, "कहाँ है [zephyr]?");
    }

    #[test]
    fn adjective_lemma_is_tried_last() {
        let out = full().translate(&Lexicon::new(), "bigger children");
        assert_eq!(out, "बड़ा बच्चा");
    }

    #[test]
    fn blank_translation_falls_through_to_lemma() {
        let mut lexicon = Lexicon::new();
        lexicon.add("loves", "");
        assert_eq!(full().translate(&lexicon, "loves"), "प्यार करना");
    }

    #[test]
    fn degraded_resources_still_translate() {
        let resolver = Resolver::new(Resources::degraded());
        assert!(!resolver.has_lemmatizer());

        let out = resolver.translate(&Lexicon::new(), "Hello world, running dogs!");
        assert_eq!(out, "नमस्ते दुनिया, [running] [dogs]!");
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_lemmatizer_is_warned_once() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let resolver = Resolver::new(Resources::degraded());
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(resolver.translate(&Lexicon::new(), "hello world"), "नमस्ते दुनिया");
            assert!(!resolver.warned_no_lemmatizer.load(Ordering::Relaxed));

            resolver.translate(&Lexicon::new(), "dogs running quickly");
            assert!(resolver.warned_no_lemmatizer.load(Ordering::Relaxed));
            resolver.translate(&Lexicon::new(), "cats jumped");
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Lemmatizer data not available").count(), 1);
        assert!(resolver.warned_no_lemmatizer.load(Ordering::Relaxed));
    }

    #[test]
    fn symbols_resolve_as_their_own_tokens() {
        let resolver = Resolver::new(Resources::degraded());
        assert_eq!(resolver.translate(&Lexicon::new(), "rock & roll"), "[rock] [&] [roll]");
        assert_eq!(resolver.translate(&Lexicon::new(), "hello - world"), "नमस्ते [-] दुनिया");
        assert_eq!(full().translate(&Lexicon::new(), "good -- bad."), "अच्छा [--] बुरा.");

        let mut lexicon = Lexicon::new();
        lexicon.add("&", "और");
        assert_eq!(full().translate(&lexicon, "Rock & Roll"), "[rock] और [roll]");
    }

    #[test]
    fn custom_plan_replaces_fallback_order() {
        let lexicon = Lexicon::new();
        let only = |form| vec![PlanStep { form, gate: Gate::Always }];

        let adjective = full().with_plan(only(LemmaForm::Pos(PartOfSpeech::Adjective)));
        let translation = adjective.resolve(&lexicon, "bigger");
        assert_eq!(translation.text, "बड़ा");
        assert_eq!(
            translation.tokens[0].resolution,
            Resolution::Lemma {
                pos: PartOfSpeech::Adjective,
                lemma: "big".to_string()
            }
        );

        let verb = full().with_plan(only(LemmaForm::Pos(PartOfSpeech::Verb)));
        assert_eq!(verb.translate(&lexicon, "bigger running"), "[bigger] दौड़ना");

        let none = full().with_plan(Vec::new());
        assert_eq!(none.translate(&lexicon, "bigger running"), "[bigger] [running]");
    }

    #[test]
    fn leading_punctuation_is_preserved() {
        let out = full().translate(&Lexicon::new(), "(Hello) \"world\"");
        assert_eq!(out, "(नमस्ते) \"दुनिया\"");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(full().translate(&Lexicon::new(), "   "), "");
    }
}
