//! Stacking expressions and the session call history.
//!
//! Stacking operators are often used as pure expression builders: a chain
//! of elements is put together first and only evaluated when the map is
//! actually built. To let "give me the last map" work across such chains,
//! the session records the structure of the most recent stacking as an
//! explicit expression tree rather than a snapshot of its value. A
//! reference to the previous map inside the chain can then be substituted
//! when the build finishes, not when the chain is written down.
//!
//! [`Session`] holds two slots: the most recent stacking expression and
//! the most recently finalized map. It is deliberately an ordinary value
//! that callers create and pass around. A host serving several independent
//! users gives each its own session; nothing here is process-global.

use crate::element::Element;
use crate::options::Options;
use crate::spec::MapSpec;


//------------ Expr ----------------------------------------------------------

/// An unevaluated stacking expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A literal specification.
    Spec(MapSpec),

    /// A reference to the last finalized map of the session.
    LastMap,

    /// The stacking of two expressions.
    Compose(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates the stacking of two expressions.
    pub fn compose(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Compose(Box::new(left.into()), Box::new(right.into()))
    }

    /// Replaces all last-map references with the given prior expression.
    ///
    /// An absent prior resolves to the empty specification.
    fn resolve(self, prior: Option<&Expr>) -> Self {
        match self {
            Expr::Spec(spec) => Expr::Spec(spec),
            Expr::LastMap => {
                match prior {
                    Some(expr) => expr.clone(),
                    None => Expr::Spec(MapSpec::new()),
                }
            }
            Expr::Compose(left, right) => {
                Expr::Compose(
                    Box::new(left.resolve(prior)),
                    Box::new(right.resolve(prior)),
                )
            }
        }
    }

    /// Evaluates the expression into a specification.
    ///
    /// Stacking nodes fold left-to-right through [`MapSpec::stack`]. An
    /// unresolved last-map reference evaluates to the empty specification.
    pub fn eval(&self, options: &Options) -> MapSpec {
        match *self {
            Expr::Spec(ref spec) => spec.clone(),
            Expr::LastMap => MapSpec::new(),
            Expr::Compose(ref left, ref right) => {
                left.eval(options).stack(right.eval(options), options)
            }
        }
    }
}

impl From<Element> for Expr {
    fn from(element: Element) -> Self {
        Expr::Spec(element.into())
    }
}

impl From<MapSpec> for Expr {
    fn from(spec: MapSpec) -> Self {
        Expr::Spec(spec)
    }
}


//------------ Session -------------------------------------------------------

/// The call history of one map-composing session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// The most recent stacking expression, not yet finalized.
    last_stack: Option<Expr>,

    /// The last finalized map, with all last-map references resolved.
    last_map: Option<Expr>,
}

impl Session {
    /// Creates a fresh session with an empty history.
    pub fn new() -> Self {
        Default::default()
    }

    /// Stacks two expressions, recording the result in the history.
    ///
    /// Every stacking overwrites the record unconditionally; only the
    /// outermost expression of a chain survives until the next
    /// [`finalize`][Self::finalize].
    pub fn stack(
        &mut self, left: impl Into<Expr>, right: impl Into<Expr>
    ) -> Expr {
        let expr = Expr::compose(left, right);
        self.last_stack = Some(expr.clone());
        expr
    }

    /// Finalizes the current map build.
    ///
    /// To be called by the host once a top-level map has been put
    /// together. Consumes the recorded stacking expression, resolves any
    /// last-map references in it against the previously finalized map and
    /// makes the result the new last map. Without a recorded expression
    /// the last map stays as it is.
    pub fn finalize(&mut self) {
        if let Some(expr) = self.last_stack.take() {
            let expr = expr.resolve(self.last_map.as_ref());
            self.last_map = Some(expr);
        }
    }

    /// Returns the last finalized map.
    ///
    /// If nothing has been finalized yet, emits an advisory warning if
    /// enabled and returns nothing.
    pub fn last_map(&self, options: &Options) -> Option<MapSpec> {
        match self.last_map {
            Some(ref expr) => Some(expr.eval(options)),
            None => {
                options.warn("no map has been composed yet");
                None
            }
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::element::ElementKind;
    use super::*;

    fn quiet() -> Options {
        Options { show_warnings: false, .. Default::default() }
    }

    fn element(kind: ElementKind) -> Element {
        Element::new(kind)
    }

    #[test]
    fn test_round_trip() {
        let options = quiet();
        let mut session = Session::new();

        let expr = session.stack(
            element(ElementKind::Grid), element(ElementKind::Compass)
        );
        let spec = expr.eval(&options);
        session.finalize();
        assert_eq!(session.last_map(&options), Some(spec.clone()));

        // Chain the previous map into a new build before finalizing.
        session.stack(spec.clone(), Expr::LastMap);
        session.finalize();
        assert_eq!(
            session.last_map(&options),
            Some(spec.clone().stack(spec, &options))
        );
    }

    #[test]
    fn test_last_map_reference_nested() {
        let options = quiet();
        let mut session = Session::new();

        session.stack(
            element(ElementKind::Grid), element(ElementKind::Grid)
        );
        session.finalize();

        // The reference sits in a sub-expression of the chain.
        let inner = Expr::compose(Expr::LastMap, element(
            ElementKind::Compass
        ));
        session.stack(element(ElementKind::Credits), inner);
        session.finalize();

        let spec = session.last_map(&options).unwrap();
        let kinds: Vec<_> = spec.elements().iter().map(
            |item| item.kind()
        ).collect();
        assert_eq!(
            kinds,
            [
                ElementKind::Credits, ElementKind::Grid,
                ElementKind::Grid, ElementKind::Compass,
            ]
        );
    }

    #[test]
    fn test_empty_history() {
        let session = Session::new();
        assert_eq!(session.last_map(&quiet()), None);
    }

    #[test]
    fn test_finalize_without_stack_keeps_last_map() {
        let options = quiet();
        let mut session = Session::new();

        session.stack(
            element(ElementKind::Grid), element(ElementKind::Compass)
        );
        session.finalize();
        let before = session.last_map(&options);

        session.finalize();
        assert_eq!(session.last_map(&options), before);
    }

    #[test]
    fn test_unresolved_reference_evals_empty() {
        assert!(Expr::LastMap.eval(&quiet()).is_empty());
    }
}
