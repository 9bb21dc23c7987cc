use crate::{Attributes, Family, Mark, NotationError, Side, SymbolTree};
use super::util::divider_angle;

#[test]
fn test_family_names() {
    assert_eq!("annuity".parse::<Family>().unwrap(), Family::Annuity);
    assert_eq!(" Reserve ".parse::<Family>().unwrap(), Family::Reserve);
    for family in Family::ALL {
        assert_eq!(family.tag().parse::<Family>().unwrap(), family);
    }
    assert!(matches!("pension".parse::<Family>(), Err(NotationError::UnknownFamily(_))));
}

#[test]
fn test_annuity() {
    // The subscript defaults to a single life
    assert_eq!(
        Family::Annuity.render(&Attributes::new()),
        sub!(ident!("a"), ident!("x")),
    );

    assert_eq!(
        super::util::annuity_due_term(),
        sub!(
            marked!(ident!("a"), Mark::DoubleDot),
            row![ident!("x"), op!(":"), divider_angle("n")],
        ),
    );

    assert_eq!(
        Family::Annuity.render(&Attributes::new().with("type", "continuous")),
        sub!(marked!(ident!("a"), Mark::Macron), ident!("x")),
    );
    assert_eq!(
        Family::Annuity.render(&Attributes::new().with("type", "sometimes")),
        sub!(ident!("a"), ident!("x")),
    );
}

#[test]
fn test_annuity_corners() {
    assert_eq!(
        Family::Annuity.render(&Attributes::new().with("deferred", "n").with("status", "x")),
        SymbolTree::PreSup {
            base: Box::new(ident!("a")),
            pre_sub: Some(Box::new(row![ident!("n"), op!("|")])),
            pre_sup: None,
            post_sub: Some(Box::new(ident!("x"))),
            post_sup: None,
        },
    );

    assert_eq!(
        Family::Annuity.render(&Attributes::new().with("frequency", "12")),
        SymbolTree::SubSup {
            base: Box::new(ident!("a")),
            sub: Some(Box::new(ident!("x"))),
            sup: Some(Box::new(row![op!("("), num!("12"), op!(")")])),
        },
    );

    // An explicit corner replaces the derived one
    assert_eq!(
        Family::Annuity.render(&Attributes::new().with("frequency", "12").with("upper-right", "m")),
        SymbolTree::SubSup {
            base: Box::new(ident!("a")),
            sub: Some(Box::new(ident!("x"))),
            sup: Some(Box::new(ident!("m"))),
        },
    );
}

#[test]
fn test_status_attributes() {
    let attrs = Attributes::new()
        .with("status", "xy")
        .with("precedence", r#"[{"position": 1, "order": 1}]"#);
    assert_eq!(
        Family::Annuity.render(&attrs),
        sub!(
            ident!("a"),
            row![ident!("x"), marked!(ident!("y"), Mark::Order { order: 1, side: Side::Top })],
        ),
    );

    let attrs = Attributes::new().with("status", "xy").with_flag("last-survivor");
    assert_eq!(
        Family::Annuity.render(&attrs),
        sub!(ident!("a"), marked!(row![ident!("x"), ident!("y")], Mark::Overline)),
    );

    // A flag spelled out as false is off
    let attrs = Attributes::new().with("status", "xy").with("last-survivor", "false");
    assert_eq!(Family::Annuity.render(&attrs), sub!(ident!("a"), row![ident!("x"), ident!("y")]));

    // A broken precedence list renders as if there were none
    let attrs = Attributes::new().with("status", "xy").with("precedence", "[{position: 1}");
    assert_eq!(Family::Annuity.render(&attrs), sub!(ident!("a"), row![ident!("x"), ident!("y")]));
}

#[test]
fn test_insurance() {
    assert_eq!(
        Family::Insurance.render(&Attributes::new().with("type", "continuous").with("status", "x:n")),
        sub!(
            marked!(ident!("A"), Mark::Macron),
            row![ident!("x"), op!(":"), marked!(ident!("n"), Mark::Angle)],
        ),
    );

    assert_eq!(
        Family::Insurance.render(&Attributes::new().with("benefit", "term").with("status", "x:n")),
        sub!(
            ident!("A"),
            row![
                row![marked!(ident!("x"), Mark::Order { order: 1, side: Side::Top })],
                op!(":"),
                marked!(ident!("n"), Mark::Angle),
            ],
        ),
    );

    assert_eq!(
        Family::Insurance.render(&Attributes::new().with("benefit", "pure-endowment")),
        SymbolTree::SubSup {
            base: Box::new(ident!("A")),
            sub: Some(Box::new(ident!("x"))),
            sup: Some(Box::new(num!("1"))),
        },
    );
}

#[test]
fn test_premium() {
    assert_eq!(
        Family::Premium.render(&Attributes::new()),
        sub!(ident!("P"), ident!("x")),
    );

    assert_eq!(
        Family::Premium.render(&Attributes::new().with("of", "A").with("type", "continuous")),
        row![
            ident!("P"),
            op!("("),
            sub!(marked!(ident!("A"), Mark::Macron), ident!("x")),
            op!(")"),
        ],
    );

    // An annuity inside uses the annuity types and angle
    assert_eq!(
        Family::Premium.render(&Attributes::new().with("of", "a").with("type", "due").with("status", "x:n")),
        row![
            ident!("P"),
            op!("("),
            sub!(marked!(ident!("a"), Mark::DoubleDot), row![ident!("x"), op!(":"), divider_angle("n")]),
            op!(")"),
        ],
    );
}

#[test]
fn test_reserve() {
    assert_eq!(
        Family::Reserve.render(&Attributes::new()),
        SymbolTree::PreSup {
            base: Box::new(ident!("V")),
            pre_sub: Some(Box::new(ident!("t"))),
            pre_sup: None,
            post_sub: Some(Box::new(ident!("x"))),
            post_sup: None,
        },
    );

    assert_eq!(
        Family::Reserve.render(&Attributes::new().with("time", "10").with("status", "x:n")),
        SymbolTree::PreSup {
            base: Box::new(ident!("V")),
            pre_sub: Some(Box::new(num!("10"))),
            pre_sup: None,
            post_sub: Some(Box::new(row![ident!("x"), op!(":"), marked!(ident!("n"), Mark::Angle)])),
            post_sup: None,
        },
    );
}

#[test]
fn test_reserve_of() {
    // The inner symbol takes the corners, including the time prescript
    assert_eq!(
        Family::Reserve.render(&Attributes::new().with("of", "a").with("type", "due")),
        row![
            ident!("V"),
            op!("("),
            SymbolTree::PreSup {
                base: Box::new(marked!(ident!("a"), Mark::DoubleDot)),
                pre_sub: Some(Box::new(ident!("t"))),
                pre_sup: None,
                post_sub: Some(Box::new(ident!("x"))),
                post_sup: None,
            },
            op!(")"),
        ],
    );
}

#[test]
fn test_reserve_deferral_and_time() {
    let deferred = |attrs: Attributes| match Family::Reserve.render(&attrs) {
        SymbolTree::Row(mut items) => match items.remove(2) {
            SymbolTree::PreSup { pre_sub, .. } => pre_sub,
            other => panic!("expected a prescript form, got {:?}", other),
        },
        other => panic!("expected a wrapped reserve, got {:?}", other),
    };

    // Without a time the deferral keeps the lower-left corner
    assert_eq!(
        deferred(Attributes::new().with("of", "a").with("deferred", "10")),
        Some(Box::new(row![num!("10"), op!("|")])),
    );

    // An explicit time takes it over
    assert_eq!(
        deferred(Attributes::new().with("of", "a").with("deferred", "10").with("time", "k")),
        Some(Box::new(ident!("k"))),
    );
}

#[test]
fn test_probability() {
    assert_eq!(
        Family::Probability.render(&Attributes::new()),
        sub!(ident!("p"), ident!("x")),
    );

    assert_eq!(
        Family::Probability.render(&Attributes::new().with("kind", "death").with("time", "t|u")),
        SymbolTree::PreSup {
            base: Box::new(ident!("q")),
            pre_sub: Some(Box::new(row![ident!("t"), op!("|"), ident!("u")])),
            pre_sup: None,
            post_sub: Some(Box::new(ident!("x"))),
            post_sup: None,
        },
    );
}

#[test]
fn test_commutation() {
    assert_eq!(
        Family::Commutation.render(&Attributes::new().with("symbol", "n")),
        sub!(ident!("N"), ident!("x")),
    );
    assert_eq!(
        Family::Commutation.render(&Attributes::new().with("symbol", "Z")),
        sub!(ident!("D"), ident!("x")),
    );
    assert_eq!(
        Family::Commutation.render(&Attributes::new().with("symbol", "M").with("type", "continuous")),
        sub!(marked!(ident!("M"), Mark::Macron), ident!("x")),
    );
}

#[test]
fn test_generic() {
    assert_eq!(Family::Generic.render(&Attributes::new()), ident!("?"));

    let attrs = Attributes::new()
        .with("symbol", "e")
        .with("decoration", "ring")
        .with("lower-right", "x:n")
        .with("angle", "plain");
    assert_eq!(
        Family::Generic.render(&attrs),
        sub!(
            marked!(ident!("e"), Mark::Ring),
            row![ident!("x"), op!(":"), marked!(ident!("n"), Mark::Angle)],
        ),
    );

    let attrs = Attributes::new()
        .with("symbol", "s")
        .with("upper-left", "2")
        .with("wrapper", "E");
    assert_eq!(
        Family::Generic.render(&attrs),
        row![
            ident!("E"),
            op!("("),
            SymbolTree::PreSup {
                base: Box::new(ident!("s")),
                pre_sub: None,
                pre_sup: Some(Box::new(num!("2"))),
                post_sub: None,
                post_sup: None,
            },
            op!(")"),
        ],
    );
}
