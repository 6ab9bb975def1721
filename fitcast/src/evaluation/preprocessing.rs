#[cfg(test)]
#[path = "../../tests/unit/evaluation/preprocessing_test.rs"]
mod preprocessing_test;

use std::borrow::Cow;
use std::marker::PhantomData;

/// A hook which normalizes a candidate once, locally, before it is broadcast to partitions.
pub trait CandidatePreprocessing: Send + Sync {
    /// A candidate type.
    type Candidate: Clone;

    /// Returns a candidate which should be evaluated instead of the original one.
    fn pre_process<'a>(&self, candidate: &'a Self::Candidate) -> Cow<'a, Self::Candidate>;
}

/// Marks which parts of a candidate are structural introns: parts which have no effect on
/// candidate's effective outputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntronMask {
    introns: Vec<bool>,
}

impl IntronMask {
    /// Creates a new mask where `true` marks an intron.
    pub fn new(introns: Vec<bool>) -> Self {
        Self { introns }
    }

    /// Returns true if part at given index is an intron. Out of range parts are not introns.
    pub fn is_intron(&self, index: usize) -> bool {
        self.introns.get(index).copied().unwrap_or(false)
    }

    /// Returns an amount of structurally effective parts.
    pub fn effective_count(&self) -> usize {
        self.introns.iter().filter(|is_intron| !**is_intron).count()
    }

    /// Returns an amount of marked parts.
    pub fn len(&self) -> usize {
        self.introns.len()
    }

    /// Returns true if mask is empty.
    pub fn is_empty(&self) -> bool {
        self.introns.is_empty()
    }
}

/// A candidate which is able to detect its structural introns and produce a reduced copy.
pub trait StructuralIntrons: Sized {
    /// Detects parts which do not contribute to effective outputs.
    fn mark_structural_introns(&self) -> IntronMask;

    /// Creates a copy which contains only parts not marked as introns.
    fn effective_copy(&self, introns: &IntronMask) -> Self;
}

/// Evaluates candidate as it is, e.g. for tree based candidates.
pub struct IdentityPreprocessing<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> Default for IdentityPreprocessing<C> {
    fn default() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<C: Clone> CandidatePreprocessing for IdentityPreprocessing<C> {
    type Candidate = C;

    fn pre_process<'a>(&self, candidate: &'a Self::Candidate) -> Cow<'a, Self::Candidate> {
        Cow::Borrowed(candidate)
    }
}

/// Evaluates an effective copy of a candidate with structural introns removed, e.g. for linear
/// programs.
pub struct EffectivePreprocessing<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> Default for EffectivePreprocessing<C> {
    fn default() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<C: StructuralIntrons + Clone> CandidatePreprocessing for EffectivePreprocessing<C> {
    type Candidate = C;

    fn pre_process<'a>(&self, candidate: &'a Self::Candidate) -> Cow<'a, Self::Candidate> {
        let introns = candidate.mark_structural_introns();

        Cow::Owned(candidate.effective_copy(&introns))
    }
}
