macro_rules! ident {
    ($t:expr) => { crate::SymbolTree::identifier($t) };
}

macro_rules! num {
    ($t:expr) => { crate::SymbolTree::number($t) };
}

macro_rules! op {
    ($t:expr) => { crate::SymbolTree::operator($t) };
}

macro_rules! row {
    ($($x:expr),* $(,)?) => { crate::SymbolTree::Row(vec![ $($x),* ]) };
}

macro_rules! marked {
    ($t:expr, $m:expr) => { crate::SymbolTree::Decorated(Box::new($t), $m) };
}

macro_rules! sub {
    ($b:expr, $s:expr $(,)?) => {
        crate::SymbolTree::SubSup { base: Box::new($b), sub: Some(Box::new($s)), sup: None }
    };
}

macro_rules! mathml {
    ($t:expr) => {
        <crate::MathMlEmitter as crate::Emitter>::render(
            &crate::MathMlEmitter::new(crate::EmitterConfig::fragment()),
            &$t,
        ).unwrap()
    };
}

macro_rules! latex {
    ($t:expr) => {
        <crate::LatexEmitter as crate::Emitter>::render(
            &crate::LatexEmitter::new(crate::EmitterConfig::fragment()),
            &$t,
        ).unwrap()
    };
}

/// The annuity-style angle around a duration, `n|` under one bar.
pub fn divider_angle(token: &str) -> crate::SymbolTree {
    marked!(row![crate::SymbolTree::leaf(token), op!("|")], crate::Mark::Angle)
}

/// ```text
///  ..
///  a
///   x:n|
/// ```
pub fn annuity_due_term() -> crate::SymbolTree {
    crate::Family::Annuity.render(
        &crate::Attributes::new()
            .with("type", "due")
            .with("status", "x:n")
    )
}
