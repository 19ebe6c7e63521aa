// Section-wise comparison of versions and version strings

use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::models::comparison::{Comparison, Relation};
use crate::models::version::{self, Version};
use crate::utils::error::ParseError;

/// Anything that can stand in for a version in a comparison
///
/// Already-parsed versions are borrowed as-is; strings are parsed on demand.
pub trait VersionOperand {
    fn to_version(&self) -> Result<Cow<'_, Version>, ParseError>;
}

impl VersionOperand for Version {
    fn to_version(&self) -> Result<Cow<'_, Version>, ParseError> {
        Ok(Cow::Borrowed(self))
    }
}

impl VersionOperand for str {
    fn to_version(&self) -> Result<Cow<'_, Version>, ParseError> {
        version::parse(self).map(Cow::Owned)
    }
}

impl VersionOperand for String {
    fn to_version(&self) -> Result<Cow<'_, Version>, ParseError> {
        self.as_str().to_version()
    }
}

/// Resolve both operands, or `None` if either fails to parse
fn resolve<'a, 'b, A, B>(a: &'a A, b: &'b B) -> Option<(Cow<'a, Version>, Cow<'b, Version>)>
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    let v1 = a.to_version().map_err(|e| debug!("left operand rejected: {}", e)).ok()?;
    let v2 = b.to_version().map_err(|e| debug!("right operand rejected: {}", e)).ok()?;
    Some((v1, v2))
}

fn versions_equal(v1: &Version, v2: &Version) -> bool {
    v1.num_sections() == v2.num_sections() && v1.sections() == v2.sections()
}

fn version_greater(v1: &Version, v2: &Version) -> bool {
    v1.compare_sections(v2) == Ordering::Greater
}

/// Evaluate `check` on both operands, mapping a parse failure to `Error`
fn evaluate<A, B>(
    relation: Relation,
    a: &A,
    b: &B,
    check: fn(&Version, &Version) -> bool,
) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    let Some((v1, v2)) = resolve(a, b) else {
        return Comparison::Error;
    };
    let outcome = Comparison::from(check(&v1, &v2));
    trace!("{} {} {} => {}", v1, relation, v2, outcome);
    outcome
}

/// Same number of sections and every section equal
pub fn equal<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    evaluate(Relation::Eq, a, b, versions_equal)
}

pub fn not_equal<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    equal(a, b).negate()
}

/// First differing section decides; otherwise the longer version is greater
pub fn greater_than<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    evaluate(Relation::Gt, a, b, version_greater)
}

pub fn greater_or_equal<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    evaluate(Relation::Ge, a, b, |v1, v2| {
        versions_equal(v1, v2) || version_greater(v1, v2)
    })
}

pub fn less_than<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    greater_than(b, a)
}

pub fn less_or_equal<A, B>(a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    evaluate(Relation::Le, a, b, |v1, v2| {
        versions_equal(v1, v2) || version_greater(v2, v1)
    })
}

/// Evaluate an arbitrary relation
pub fn compare<A, B>(relation: Relation, a: &A, b: &B) -> Comparison
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    match relation {
        Relation::Eq => equal(a, b),
        Relation::Ne => not_equal(a, b),
        Relation::Gt => greater_than(a, b),
        Relation::Ge => greater_or_equal(a, b),
        Relation::Lt => less_than(a, b),
        Relation::Le => less_or_equal(a, b),
    }
}

/// Total ordering of two operands, with the parse failure kept as a typed error
pub fn ordering<A, B>(a: &A, b: &B) -> Result<Ordering, ParseError>
where
    A: VersionOperand + ?Sized,
    B: VersionOperand + ?Sized,
{
    let v1 = a.to_version()?;
    let v2 = b.to_version()?;
    Ok(v1.compare_sections(&v2))
}
