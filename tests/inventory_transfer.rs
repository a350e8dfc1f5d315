/// Picking up and putting down items in the built-in tour.
use courtyard_walk::world::{Item, Transfer, World, validate_world};

#[test]
fn pick_basket_twice() {
    let mut world = World::vilnius().expect("tour");

    assert_eq!(world.pick_item("Basket"), Transfer::Moved);
    assert!(world.item_names().is_empty());
    assert_eq!(world.collected_item_names(), vec!["Basket"]);

    assert_eq!(world.pick_item("Basket"), Transfer::Missing);
    assert_eq!(world.collected_item_names(), vec!["Basket"]);
}

#[test]
fn pick_then_put_restores_the_location() {
    let mut world = World::vilnius().expect("tour");
    world.go_forward();
    let before = world.item_names();

    assert_eq!(world.pick_item("Sarbievijus"), Transfer::Moved);
    assert_eq!(world.location_item_count(), 0);
    assert_eq!(world.put_item("Sarbievijus"), Transfer::Moved);

    assert_eq!(world.item_names(), before);
    assert_eq!(world.item_assets(), vec!["sarbievijus.png"]);
    assert!(world.collected_item_names().is_empty());
}

#[test]
fn put_without_carrying_is_a_no_op() {
    let mut world = World::vilnius().expect("tour");
    assert_eq!(world.put_item("Telescope"), Transfer::Missing);
    assert_eq!(world.item_names(), vec!["Basket"]);
}

#[test]
fn carry_items_between_locations() {
    let mut world = World::vilnius().expect("tour");

    world.pick_item("Basket");
    world.go_forward();
    assert_eq!(world.put_item("Basket"), Transfer::Moved);
    assert_eq!(world.item_names(), vec!["Sarbievijus", "Basket"]);
    assert_eq!(world.item_assets(), vec!["sarbievijus.png", "basket.png"]);
    assert!(validate_world(&world).is_empty());
}

#[test]
fn fourth_item_is_refused() {
    let mut world = World::vilnius().expect("tour");

    // Collect three items around the tour, then bring them to sDaukantas.
    world.pick_item("Basket");
    world.go_forward(); // sarbievijus
    world.pick_item("Sarbievijus");
    world.go_right();
    world.go_forward(); // pSkarga
    world.pick_item("Petras Skarga");
    world.go_around();
    world.go_forward(); // sarbievijus, facing west
    world.go_right();
    world.go_forward(); // sDaukantas
    assert_eq!(world.current_location().name(), "sDaukantas");

    assert_eq!(world.put_item("Basket"), Transfer::Moved);
    assert_eq!(world.put_item("Sarbievijus"), Transfer::Moved);
    assert_eq!(world.location_item_count(), 3);

    assert_eq!(world.put_item("Petras Skarga"), Transfer::Full);
    assert_eq!(world.collected_item_names(), vec!["Petras Skarga"]);
    assert_eq!(world.location_item_count(), 3);
}

#[test]
fn second_item_under_a_held_name_is_not_lost() {
    let mut world = World::vilnius().expect("tour");

    assert_eq!(world.pick_item("Basket"), Transfer::Moved);
    world.go_forward(); // sarbievijus
    let id = world.current_id();
    world
        .location_mut(id)
        .expect("location")
        .add_content(Item::new("Basket", "other.png").expect("item"));

    assert_eq!(world.pick_item("Basket"), Transfer::Carried);

    let in_locations = world
        .locations()
        .flat_map(|(_, loc)| loc.content())
        .filter(|item| item.name() == "Basket")
        .count();
    let collected = world.collected_items().filter(|item| item.name() == "Basket").count();
    assert_eq!(in_locations + collected, 2);
    assert_eq!(world.item_names(), vec!["Sarbievijus", "Basket"]);

    // Both baskets are still reachable, so the audit sees the duplicate name.
    assert_eq!(validate_world(&world).len(), 1);
}
