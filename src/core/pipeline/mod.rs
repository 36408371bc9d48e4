//! Composable fallible-step pipelines
//!
//! A pipeline is a sequence of steps, each a function from the previous
//! step's success value to a `Result`. Composition short-circuits: the
//! first failure is returned as-is and no later step runs. This module
//! generalizes the "check, early-return, check, early-return" chains the
//! services would otherwise repeat into a single typed operator.
//!
//! Steps are synchronous, single-threaded value transformations. There is
//! no suspension, no shared state, and no hidden error recovery: a step
//! whose failure should not abort the pipeline is handled by the caller
//! inspecting its `Result` explicitly (see `core::publish` for an example).
//!
//! # Example
//!
//! ```
//! use tally::core::pipeline::Step;
//!
//! let parse = |s: &str| s.parse::<i32>().map_err(|_| "not a number");
//! let positive = |n: i32| if n > 0 { Ok(n) } else { Err("not positive") };
//! let double = |n: i32| Ok::<_, &str>(n * 2);
//!
//! let pipeline = parse.then(positive).then(double);
//! assert_eq!(pipeline.apply("21"), Ok(42));
//! assert_eq!(pipeline.apply("-3"), Err("not positive"));
//! assert_eq!(pipeline.apply("abc"), Err("not a number"));
//! ```

/// A single fallible transformation in a pipeline
///
/// Implemented for free by any `Fn(In) -> Result<Out, Error>`, so plain
/// functions and closures are steps without ceremony.
pub trait Step<In> {
    /// Success value produced by this step
    type Out;

    /// Error type shared along the chain
    type Error;

    /// Runs the step on one input
    fn apply(&self, input: In) -> Result<Self::Out, Self::Error>;

    /// Chains another step after this one
    ///
    /// The composed step evaluates `self` first. A failure is returned
    /// immediately and `next` is never invoked. A success feeds `next`,
    /// whose result is returned directly, without re-wrapping.
    ///
    /// Composition is associative: `(f.then(g)).then(h)` and
    /// `f.then(g.then(h))` produce the same outcome for every input, since
    /// evaluation order stays left to right either way.
    fn then<N>(self, next: N) -> Then<Self, N>
    where
        Self: Sized,
        N: Step<Self::Out, Error = Self::Error>,
    {
        Then {
            first: self,
            second: next,
        }
    }
}

impl<In, Out, Error, F> Step<In> for F
where
    F: Fn(In) -> Result<Out, Error>,
{
    type Out = Out;
    type Error = Error;

    fn apply(&self, input: In) -> Result<Out, Error> {
        self(input)
    }
}

/// Two steps composed into one
///
/// Built by [`Step::then`]; rarely named directly.
#[derive(Debug, Clone)]
pub struct Then<F, S> {
    first: F,
    second: S,
}

impl<In, F, S> Step<In> for Then<F, S>
where
    F: Step<In>,
    S: Step<F::Out, Error = F::Error>,
{
    type Out = S::Out;
    type Error = F::Error;

    fn apply(&self, input: In) -> Result<Self::Out, Self::Error> {
        match self.first.apply(input) {
            Ok(value) => self.second.apply(value),
            Err(error) => Err(error),
        }
    }
}
