//! Scheduled elements as seen by the engine.

/// One way an element can join a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<N, S> {
    /// Multiplicative weight of this choice.
    pub weight: S,
    /// Ids that become occupied when this choice is taken.
    pub participants: Vec<N>,
}

impl<N, S> Choice<N, S> {
    /// Creates a choice.
    #[must_use]
    pub fn new(weight: S, participants: Vec<N>) -> Self {
        Self {
            weight,
            participants,
        }
    }
}

/// One scheduled element: the factor `1 + sum_c w_c * t * prod(eta_p)` over
/// its choices, followed by closing the listed ids.
///
/// An edge of a graph has a single choice with its two endpoints; a matrix
/// row has one choice per non-zero column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incidence<N, S> {
    choices: Vec<Choice<N, S>>,
    closing: Vec<N>,
}

impl<N, S> Incidence<N, S> {
    /// An element with a single choice.
    #[must_use]
    pub fn single(weight: S, participants: Vec<N>) -> Self {
        Self::from_choices(vec![Choice::new(weight, participants)])
    }

    /// An element offering several mutually exclusive choices.
    #[must_use]
    pub fn from_choices(choices: Vec<Choice<N, S>>) -> Self {
        Self {
            choices,
            closing: Vec::new(),
        }
    }

    /// Sets the ids whose last reference is this element.
    #[must_use]
    pub fn with_closing(mut self, closing: Vec<N>) -> Self {
        self.closing = closing;
        self
    }

    /// The alternative choices.
    #[must_use]
    pub fn choices(&self) -> &[Choice<N, S>] {
        &self.choices
    }

    /// Ids closed after this element.
    #[must_use]
    pub fn closing(&self) -> &[N] {
        &self.closing
    }
}
