use refscale_core::display::Coin;

#[test]
fn test_coin_diameters() {
    assert_eq!(Coin::Penny.diameter_mm(), 19.05);
    assert_eq!(Coin::Nickel.diameter_mm(), 21.21);
    assert_eq!(Coin::Dime.diameter_mm(), 17.91);
    assert_eq!(Coin::Quarter.diameter_mm(), 24.26);
}

#[test]
fn test_coin_listing_order() {
    let names: Vec<&str> = Coin::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Penny", "Nickel", "Dime", "Quarter"]);
}

#[test]
fn test_coin_selection_label() {
    assert_eq!(Coin::selection_label(None), "Selected: (none)");
    assert_eq!(
        Coin::selection_label(Some(Coin::Dime)),
        "Selected: Dime (17.91 mm)"
    );
}

#[test]
fn test_coin_from_str_is_case_insensitive() {
    assert_eq!("quarter".parse::<Coin>().unwrap(), Coin::Quarter);
    assert_eq!(" Nickel ".parse::<Coin>().unwrap(), Coin::Nickel);
    assert!("euro".parse::<Coin>().is_err());
}
