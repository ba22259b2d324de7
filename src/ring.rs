//! Ring descriptors: variable naming schemes and ring construction.
//!
//! The algebraic identity of a ring is carried by the type parameters
//! (order, monomial representation, coefficient ring); the descriptor adds
//! the value-level naming scheme and hands out generators. Named rings use
//! the bounded dense monomial representation, numbered rings the unbounded
//! sparse one.

use std::marker::PhantomData;

use itertools::Itertools;
use num_traits::One;

use crate::coefficient::Coefficient;
use crate::error::{Error, Result};
use crate::monomial::{
    ordering::MonomialOrder, DenseMonomial, Exponent, Monomial, SparseMonomial,
};
use crate::polynomial::Polynomial;

/// How a ring names its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarScheme {
    /// A fixed, explicitly named variable set, in positional order.
    Named(Vec<String>),
    /// An unbounded family `prefix0, prefix1, …`.
    Numbered(String),
}

impl VarScheme {
    pub(crate) fn contains(&self, name: &str) -> bool {
        match self {
            VarScheme::Named(names) => names.iter().any(|n| n == name),
            VarScheme::Numbered(prefix) => name
                .strip_prefix(prefix.as_str())
                .map_or(false, |rest| {
                    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
                }),
        }
    }
}

/// Value-level descriptor of a polynomial ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyRing<O, M, C> {
    scheme: VarScheme,
    ring: PhantomData<(O, M, C)>,
}

/// Named ring over arbitrary-precision rationals with the default exponent
/// width.
pub type RationalPolyRing<O> =
    PolyRing<O, DenseMonomial<crate::DefaultExponent>, rug::Rational>;

/// Numbered ring over arbitrary-precision rationals with the default
/// exponent width.
pub type RationalNumberedRing<O> =
    PolyRing<O, SparseMonomial<crate::DefaultExponent>, rug::Rational>;

impl<O, M, C> PolyRing<O, M, C> {
    pub fn scheme(&self) -> &VarScheme {
        &self.scheme
    }
}

impl<O, E, C> PolyRing<O, DenseMonomial<E>, C>
where
    O: MonomialOrder,
    E: Exponent,
    C: Coefficient,
{
    /// Builds the named ring and its generator polynomials, one per name in
    /// positional order. Repeated names are rejected.
    pub fn new(names: &[&str]) -> Result<(Self, Vec<Polynomial<O, DenseMonomial<E>, C>>)> {
        if let Some(name) = names.iter().duplicates().next() {
            return Err(Error::DuplicateVariable((*name).to_owned()));
        }
        let ring = PolyRing {
            scheme: VarScheme::Named(names.iter().map(|s| (*s).to_owned()).collect()),
            ring: PhantomData,
        };
        let generators = PolyRing::<O, DenseMonomial<E>, C>::generators(&ring);
        Ok((ring, generators))
    }

    pub(crate) fn from_names(names: Vec<String>) -> Self {
        PolyRing {
            scheme: VarScheme::Named(names),
            ring: PhantomData,
        }
    }

    /// The generator polynomials, one per variable.
    pub fn generators(&self) -> Vec<Polynomial<O, DenseMonomial<E>, C>> {
        let arity = self.arity();
        (0..arity)
            .map(|j| Polynomial::from_monomial(DenseMonomial::variable(j, arity), C::one()))
            .collect()
    }

    pub fn arity(&self) -> usize {
        self.names().len()
    }

    /// Variable names in positional order.
    pub fn names(&self) -> &[String] {
        match &self.scheme {
            VarScheme::Named(names) => names,
            VarScheme::Numbered(_) => unreachable!("named rings always carry a name list"),
        }
    }
}

impl<O, E, OB, MB, CB> PolyRing<O, DenseMonomial<E>, Polynomial<OB, MB, CB>>
where
    O: MonomialOrder,
    E: Exponent,
    OB: MonomialOrder,
    MB: Monomial,
    CB: Coefficient,
{
    /// Builds a named ring whose coefficient ring is the polynomial ring
    /// described by `base`, rejecting outer names that collide with the
    /// base ring's variables.
    #[allow(clippy::type_complexity)]
    pub fn new_over(
        base: &PolyRing<OB, MB, CB>,
        names: &[&str],
    ) -> Result<(
        Self,
        Vec<Polynomial<O, DenseMonomial<E>, Polynomial<OB, MB, CB>>>,
    )> {
        for name in names {
            if base.scheme.contains(name) {
                return Err(Error::DuplicateVariable((*name).to_owned()));
            }
        }
        Self::new(names)
    }
}

impl<O, E, C> PolyRing<O, SparseMonomial<E>, C>
where
    O: MonomialOrder,
    E: Exponent,
    C: Coefficient,
{
    /// A ring with the unbounded variable family `prefix0, prefix1, …`.
    pub fn numbered(prefix: &str) -> Self {
        PolyRing {
            scheme: VarScheme::Numbered(prefix.to_owned()),
            ring: PhantomData,
        }
    }

    pub fn prefix(&self) -> &str {
        match &self.scheme {
            VarScheme::Numbered(prefix) => prefix,
            VarScheme::Named(_) => unreachable!("numbered rings always carry a prefix"),
        }
    }

    /// The generator at `index`.
    pub fn generator(&self, index: usize) -> Polynomial<O, SparseMonomial<E>, C> {
        Polynomial::from_monomial(SparseMonomial::variable(index), C::one())
    }

    /// The unbounded, lazily produced generator sequence.
    pub fn generators(&self) -> impl Iterator<Item = Polynomial<O, SparseMonomial<E>, C>> + '_ {
        (0..).map(|index| self.generator(index))
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use rug::Rational;

    use super::*;
    use crate::monomial::ordering::{DegRevLex, Lex};

    #[test]
    fn named_ring_hands_out_generators() {
        let (ring, gens) =
            RationalPolyRing::<DegRevLex>::new(&["x", "y", "z"]).unwrap();
        assert_eq!(ring.arity(), 3);
        assert_eq!(ring.names(), ["x", "y", "z"]);
        assert_eq!(gens.len(), 3);
        for (j, g) in gens.iter().enumerate() {
            assert_eq!(g.nterms(), 1);
            let lead = g.leading_term().unwrap();
            assert_eq!(lead.coefficient(), &Rational::from(1));
            assert_eq!(lead.monomial().exponent(j), 1);
            assert_eq!(lead.monomial().total_degree(), 1);
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = RationalPolyRing::<DegRevLex>::new(&["x", "y", "x"]);
        assert_eq!(
            result.err(),
            Some(Error::DuplicateVariable("x".to_owned()))
        );
    }

    #[test]
    fn tower_construction_checks_the_base_variables() {
        let (base, _) = PolyRing::<Lex, DenseMonomial<i16>, i64>::new(&["a", "b"]).unwrap();

        let collision = PolyRing::<DegRevLex, DenseMonomial<i16>, _>::new_over(&base, &["x", "b"]);
        assert_eq!(
            collision.err(),
            Some(Error::DuplicateVariable("b".to_owned()))
        );

        let (tower, gens) =
            PolyRing::<DegRevLex, DenseMonomial<i16>, _>::new_over(&base, &["x", "y"]).unwrap();
        assert_eq!(tower.names(), ["x", "y"]);
        assert_eq!(gens.len(), 2);
        // Tower coefficients are polynomials of the base ring.
        assert!(!gens[0].leading_coefficient().unwrap().is_zero());
    }

    #[test]
    fn numbered_ring_generates_lazily() {
        let ring = RationalNumberedRing::<DegRevLex>::numbered("x");
        assert_eq!(ring.prefix(), "x");

        let gens: Vec<_> = ring.generators().take(5).collect();
        assert_eq!(gens.len(), 5);
        for (j, g) in gens.iter().enumerate() {
            assert_eq!(g.leading_monomial().unwrap().exponent(j), 1);
        }

        // Far-out generators exist without materializing anything between.
        let far = ring.generator(1_000_000);
        assert_eq!(far.leading_monomial().unwrap().exponent(1_000_000), 1);
    }

    #[test]
    fn numbered_scheme_collision_detection() {
        let ring = RationalNumberedRing::<DegRevLex>::numbered("x");
        assert!(ring.scheme().contains("x12"));
        assert!(!ring.scheme().contains("x"));
        assert!(!ring.scheme().contains("y3"));

        let collision =
            PolyRing::<Lex, DenseMonomial<i16>, _>::new_over(&ring, &["x3"]);
        assert_eq!(
            collision.err(),
            Some(Error::DuplicateVariable("x3".to_owned()))
        );
    }
}
