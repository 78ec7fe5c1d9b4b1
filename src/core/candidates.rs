// File: src/core/candidates.rs
use crate::core::types::PartOfSpeech;
use crate::lemma::Lemmatize;

/// Which lemma a plan step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaForm {
    Pos(PartOfSpeech),
    /// No part-of-speech hint.
    Default,
}

/// When a plan step is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Only when the noun lemma differs from the core.
    NounLemmaChanged,
    /// Only when this step's own lemma differs from the core.
    DiffersFromCore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub form: LemmaForm,
    pub gate: Gate,
}

const fn step(form: LemmaForm, gate: Gate) -> PlanStep {
    PlanStep { form, gate }
}

/// Fallback order tried after a direct lookup misses. The first candidate
/// found in the lexicon wins.
pub const CANDIDATE_PLAN: [PlanStep; 7] = [
    step(LemmaForm::Pos(PartOfSpeech::Verb), Gate::Always),
    step(LemmaForm::Pos(PartOfSpeech::Noun), Gate::Always),
    step(LemmaForm::Default, Gate::NounLemmaChanged),
    step(LemmaForm::Default, Gate::DiffersFromCore),
    step(LemmaForm::Pos(PartOfSpeech::Verb), Gate::DiffersFromCore),
    step(LemmaForm::Pos(PartOfSpeech::Adjective), Gate::DiffersFromCore),
    step(LemmaForm::Pos(PartOfSpeech::Adverb), Gate::DiffersFromCore),
];

/// A lemma to try, with the part of speech that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pos: PartOfSpeech,
    pub lemma: String,
}

/// Lemmas of one core under every part of speech, computed once.
#[derive(Debug, Clone)]
pub struct LemmaForms {
    pub verb: String,
    pub noun: String,
    pub adjective: String,
    pub adverb: String,
    pub default: String,
}

impl LemmaForms {
    pub fn compute(core: &str, lemmatizer: &dyn Lemmatize) -> Self {
        Self {
            verb: lemmatizer.lemmatize(core, PartOfSpeech::Verb),
            noun: lemmatizer.lemmatize(core, PartOfSpeech::Noun),
            adjective: lemmatizer.lemmatize(core, PartOfSpeech::Adjective),
            adverb: lemmatizer.lemmatize(core, PartOfSpeech::Adverb),
            default: lemmatizer.lemmatize_default(core),
        }
    }

    fn get(&self, form: LemmaForm) -> (PartOfSpeech, &str) {
        match form {
            LemmaForm::Pos(PartOfSpeech::Verb) => (PartOfSpeech::Verb, self.verb.as_str()),
            LemmaForm::Pos(PartOfSpeech::Noun) => (PartOfSpeech::Noun, self.noun.as_str()),
            LemmaForm::Pos(PartOfSpeech::Adjective) => (PartOfSpeech::Adjective, self.adjective.as_str()),
            LemmaForm::Pos(PartOfSpeech::Adverb) => (PartOfSpeech::Adverb, self.adverb.as_str()),
            LemmaForm::Default => (PartOfSpeech::Noun, self.default.as_str()),
        }
    }
}

/// Applies `plan` to the precomputed lemmas of `core`, in order.
///
/// Gated steps whose gate is closed are left out. The list may still contain
/// repeats and the core itself; callers skip those when looking up.
pub fn lemma_candidates(core: &str, forms: &LemmaForms, plan: &[PlanStep]) -> Vec<Candidate> {
    plan.iter()
        .filter_map(|step| {
            let (pos, lemma) = forms.get(step.form);
            let open = match step.gate {
                Gate::Always => true,
                Gate::NounLemmaChanged => forms.noun != core,
                Gate::DiffersFromCore => lemma != core,
            };
            open.then(|| Candidate {
                pos,
                lemma: lemma.to_string(),
            })
        })
        .collect()
}
