//! Connection search behavior over synthetic datasets.

use castlink_core::{find_connection, find_connection_bounded, CoreError, MAX_DEGREE};
use castlink_testkit::fixtures;

#[test]
fn concrete_two_hop_scenario() {
    let store = fixtures::sample().store();
    let path = find_connection(&store, "A", "C").unwrap().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(
        path.to_string(),
        "A was in M (2000) with B.\nB was in N (2001) with C."
    );
}

#[test]
fn shortest_route_wins_over_longer_route() {
    let store = fixtures::two_routes().store();
    let path = find_connection(&store, "Src", "Dst").unwrap().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.hops()[0].person, "Mid");
}

#[test]
fn six_hop_chain_is_found_at_the_bound() {
    let store = fixtures::chain(6).store();
    let path = find_connection(&store, "P00", "P06").unwrap().unwrap();
    assert_eq!(path.len(), 6);
}

#[test]
fn seven_hop_chain_is_out_of_reach() {
    let store = fixtures::chain(7).store();
    assert!(find_connection(&store, "P00", "P07").unwrap().is_none());
}

#[test]
fn returned_path_never_exceeds_the_bound() {
    let store = fixtures::chain(8).store();
    for dest in ["P01", "P03", "P06"] {
        let path = find_connection(&store, "P00", dest).unwrap().unwrap();
        assert!(path.len() <= MAX_DEGREE);
        assert_eq!(path.last_person(), dest);
    }
    assert!(find_connection(&store, "P00", "P08").unwrap().is_none());
}

#[test]
fn explicit_bound_overrides_the_default() {
    let store = fixtures::chain(8).store();
    let path = find_connection_bounded(&store, "P00", "P08", 8)
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 8);
}

#[test]
fn self_connection_is_rejected_not_searched() {
    let store = fixtures::sample().store();
    assert!(matches!(
        find_connection(&store, "A", "A"),
        Err(CoreError::SamePerson)
    ));
    // even for a person who is not in the dataset at all
    assert!(matches!(
        find_connection(&store, "Nobody", "Nobody"),
        Err(CoreError::SamePerson)
    ));
}

#[test]
fn person_with_no_credits_yields_no_path() {
    let store = fixtures::sample().store();
    assert!(find_connection(&store, "Nobody", "C").unwrap().is_none());
    assert!(find_connection(&store, "A", "Nobody").unwrap().is_none());
}

#[test]
fn concurrent_searches_share_one_store() {
    let store = fixtures::chain(6).store();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["P01", "P03", "P06"]
            .into_iter()
            .map(|dest| scope.spawn(|| find_connection(&store, "P00", dest).unwrap().unwrap()))
            .collect();
        for handle in handles {
            let path = handle.join().unwrap();
            assert!(path.len() <= MAX_DEGREE);
        }
    });
}

#[test]
fn each_hop_is_a_real_co_appearance() {
    let store = fixtures::two_routes().store();
    let path = find_connection(&store, "Src", "Dst").unwrap().unwrap();

    let mut from = path.source().to_owned();
    for hop in path.hops() {
        let cast = store.cast_of(&hop.film).unwrap().unwrap();
        assert!(cast.contains(&from), "{from} not in cast of {}", hop.film);
        assert!(
            cast.contains(&hop.person),
            "{} not in cast of {}",
            hop.person,
            hop.film
        );
        from = hop.person.clone();
    }
    assert_eq!(from, "Dst");
}
