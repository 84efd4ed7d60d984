use crate::helpers::*;
use crate::models::*;
use crate::tsplib::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{BufReader, BufWriter};

fn create_random_instance(rng: &mut SmallRng) -> Instance {
    let size = rng.gen_range(1..50);
    let mut builder = InstanceBuilder::default();

    if rng.gen_bool(0.8) {
        builder.capacity(rng.gen_range(1..1000));
    }

    if rng.gen_bool(0.8) {
        builder.edge_weight_type(["EUC_2D", "GEO", "ATT", "CEIL_2D"][rng.gen_range(0..4)]);
    }

    (1..=size).for_each(|id| {
        let location = (rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
        let demand = if rng.gen_bool(0.9) { Some(rng.gen_range(0..100)) } else { None };
        builder.add_node(&id.to_string(), location, demand, id == 1 || rng.gen_bool(0.05));
    });

    builder.build()
}

#[test]
fn can_read_written_random_instances_back() {
    let mut rng = SmallRng::seed_from_u64(42);

    (0..100).for_each(|_| {
        let instance = create_random_instance(&mut rng);
        let mut buffer = Vec::new();

        instance.write_tsplib(BufWriter::new(&mut buffer)).expect("cannot write instance");
        let parsed = BufReader::new(buffer.as_slice()).read_tsplib().expect("cannot read instance");

        assert_eq!(parsed, instance);
    });
}

#[test]
fn can_keep_one_node_per_distinct_coordinate_id() {
    let mut rng = SmallRng::seed_from_u64(7);
    let ids = (0..200).map(|_| rng.gen_range(1..30)).collect::<Vec<u32>>();
    let content = std::iter::once("NODE_COORD_SECTION".to_string())
        .chain(ids.iter().map(|id| format!("{id} {id}.5 0")))
        .collect::<Vec<_>>();

    let instance = InstanceParser::default().parse(&content).expect("cannot parse instance");

    let mut distinct = ids.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(instance.nodes.len(), distinct.len());
    assert!(ids.iter().all(|id| instance.nodes.contains(&id.to_string())));
}

#[test]
fn can_convert_example_instance_into_json() {
    let instance = get_example_instance_reader().read_tsplib().expect("cannot read instance");
    let mut buffer = Vec::new();

    serialize_instance(&mut BufWriter::new(&mut buffer), &instance, false).expect("cannot serialize instance");
    let json: serde_json::Value = serde_json::from_slice(&buffer).expect("cannot parse json");

    assert_eq!(json["capacity"], 30);
    assert_eq!(json["edgeWeightType"], "EUC_2D");
    assert_eq!(json["nodes"]["1"]["isDepot"], true);
    assert_eq!(json["nodes"]["6"], serde_json::json!({ "x": 66.0, "y": 6.0, "isDepot": false, "demand": 8 }));
}
