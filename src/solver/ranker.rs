use crate::expression::Expression;

/// The simplest candidate under the expression order, if any
pub fn best<'a, I>(candidates: I) -> Option<&'a Expression>
where
    I: IntoIterator<Item = &'a Expression>,
{
    candidates.into_iter().min()
}

/// All candidates, simplest first
pub fn ranked<'a, I>(candidates: I) -> Vec<&'a Expression>
where
    I: IntoIterator<Item = &'a Expression>,
{
    let mut out: Vec<&Expression> = candidates.into_iter().collect();
    out.sort_unstable();
    out
}
