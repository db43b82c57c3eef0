mod common;

use astrogator_lib::{find_route, reachable_systems, Error, RouteOptions};

use common::{corridor_source, hx, marches_source};

#[test]
fn goals_in_range_take_a_single_jump() {
    let source = corridor_source();
    let options = RouteOptions::new("Corridor");

    let route = find_route(&source, "0101", "0103", &options).expect("route exists");
    assert_eq!(route.path, vec![hx("0101"), hx("0103")]);
    assert_eq!(route.system_names, vec!["Atsa", "Bishop"]);
    assert_eq!(route.jump_range, 2);
    assert_eq!(route.jumps, 1);
    assert_eq!(route.parsecs, 2);
}

#[test]
fn searches_thread_the_main_in_minimum_jumps() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let route = find_route(&source, "0105", "0705", &options).expect("route exists");
    assert_eq!(
        route.path,
        vec![hx("0105"), hx("0305"), hx("0505"), hx("0705")]
    );
    assert_eq!(
        route.system_names,
        vec!["Ferry", "Tanith", "Skald", "Rhylanor"]
    );
    assert_eq!(route.jumps, 3);
    assert_eq!(route.parsecs, 6);
}

#[test]
fn chained_jumps_cover_the_corridor() {
    let source = corridor_source();
    let options = RouteOptions::new("Corridor");

    let route = find_route(&source, "0101", "0107", &options).expect("route exists");
    assert_eq!(
        route.path,
        vec![hx("0101"), hx("0103"), hx("0105"), hx("0107")]
    );
    assert_eq!(route.jumps, 3);
    assert_eq!(route.parsecs, 6);
}

#[test]
fn planning_is_deterministic() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let first = find_route(&source, "0105", "0705", &options).expect("route exists");
    let second = find_route(&source, "0105", "0705", &options).expect("route exists");
    assert_eq!(first, second);
}

#[test]
fn isolated_systems_have_no_route_at_any_rating() {
    let source = marches_source();
    let options = RouteOptions {
        jump_range: 6,
        ..RouteOptions::new("Spinward Marches")
    };

    let error = find_route(&source, "0105", "0115", &options).expect_err("Sacnoth is isolated");
    assert!(format!("{error}").contains("no valid route found"));
}

#[test]
fn direct_jumps_skip_zone_and_fuel_rules() {
    let source = marches_source();
    let options = RouteOptions {
        avoid_red_zones: true,
        avoid_amber_zones: true,
        require_refuel_at_each_stop: true,
        wilderness_refuel_only: true,
        ..RouteOptions::new("Spinward Marches")
    };

    let route = find_route(&source, "0205", "0405", &options).expect("direct jump");
    assert_eq!(route.path, vec![hx("0205"), hx("0405")]);
    assert_eq!(route.jumps, 1);
}

#[test]
fn red_zone_goals_beyond_direct_range_need_the_flag() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let error = find_route(&source, "0105", "0405", &options).expect_err("Cogri is interdicted");
    assert!(matches!(error, Error::NoRoute { .. }));

    let reckless = RouteOptions {
        avoid_red_zones: false,
        ..options
    };
    let route = find_route(&source, "0105", "0405", &reckless).expect("route exists");
    assert_eq!(route.jumps, 2);
}

#[test]
fn red_zones_block_transit_until_allowed() {
    let source = marches_source();
    let options = RouteOptions {
        jump_range: 1,
        ..RouteOptions::new("Spinward Marches")
    };

    let error = find_route(&source, "0305", "0505", &options).expect_err("Cogri blocks the lane");
    assert!(matches!(error, Error::NoRoute { .. }));

    let reckless = RouteOptions {
        avoid_red_zones: false,
        ..options
    };
    let route = find_route(&source, "0305", "0505", &reckless).expect("route exists");
    assert_eq!(route.path, vec![hx("0305"), hx("0405"), hx("0505")]);
}

#[test]
fn red_zone_origins_do_not_strand_the_ship() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let route = find_route(&source, "0405", "0705", &options).expect("route exists");
    assert_eq!(route.jumps, 2);
}

#[test]
fn amber_zones_pass_unless_avoided() {
    let source = marches_source();
    let options = RouteOptions {
        jump_range: 1,
        ..RouteOptions::new("Spinward Marches")
    };

    let route = find_route(&source, "0105", "0305", &options).expect("route exists");
    assert_eq!(route.path, vec![hx("0105"), hx("0205"), hx("0305")]);

    let wary = RouteOptions {
        avoid_amber_zones: true,
        ..options
    };
    let error = find_route(&source, "0105", "0305", &wary).expect_err("Marduk is the only stop");
    assert!(matches!(error, Error::NoRoute { .. }));
}

#[test]
fn route_jumps_agree_with_reachability_sweeps() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let reachable = reachable_systems(&source, "0105", 6, &options).expect("sweep runs");
    assert!(!reachable.is_empty());
    for (hex, entry) in &reachable {
        let route =
            find_route(&source, "0105", &hex.to_string(), &options).expect("route exists");
        assert_eq!(route.jumps, entry.jumps, "jumps to {hex}");
    }
}

#[test]
fn a_jump_6_drive_crosses_the_corridor_outright() {
    let source = corridor_source();
    let options = RouteOptions {
        jump_range: 6,
        ..RouteOptions::new("Corridor")
    };

    let route = find_route(&source, "0101", "0107", &options).expect("route exists");
    assert_eq!(route.jumps, 1);
    assert_eq!(route.parsecs, 6);
}

#[test]
fn unknown_sectors_are_reported_by_name() {
    let source = marches_source();
    let options = RouteOptions::new("Nowhere");

    let error = find_route(&source, "0105", "0705", &options).expect_err("sector missing");
    assert!(matches!(error, Error::UnknownSector { name } if name == "Nowhere"));
}

#[test]
fn empty_hexes_are_reported_with_their_sector() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let error = find_route(&source, "0105", "0999", &options).expect_err("hex is empty");
    assert!(format!("{error}").contains("no system at hex 0999"));
}

#[test]
fn malformed_hexes_fail_before_the_search() {
    let source = marches_source();
    let options = RouteOptions::new("Spinward Marches");

    let error = find_route(&source, "01", "0705", &options).expect_err("two digits");
    assert!(matches!(error, Error::InvalidHex { .. }));
}

#[test]
fn out_of_range_jump_ratings_are_rejected() {
    let source = marches_source();
    for jump_range in [0, 7] {
        let options = RouteOptions {
            jump_range,
            ..RouteOptions::new("Spinward Marches")
        };
        let error = find_route(&source, "0105", "0705", &options).expect_err("bad rating");
        assert!(matches!(error, Error::InvalidJumpRange { value } if value == jump_range));
    }
}
