use super::*;
use crate::helpers::*;
use crate::tsplib::InstanceParser;

fn write_to_string(instance: &Instance) -> GenericResult<String> {
    let mut buffer = Vec::new();
    instance.write_tsplib(BufWriter::new(&mut buffer))?;

    String::from_utf8(buffer).map_err(|err| err.to_string().into())
}

#[test]
fn can_write_canonical_layout() {
    let instance = create_two_nodes_instance();

    let content = write_to_string(&instance).expect("cannot write instance");

    assert_eq!(
        content,
        "CAPACITY : 50\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 10 0\nDEMAND_SECTION\n1 0\n2 5\n\
         DEPOT_SECTION\n1\n-1\nEOF\n"
    );
}

#[test]
fn can_skip_unset_values() {
    let instance = InstanceBuilder::default().add_node("1", (1.5, -2.25), None, false).build();

    let content = write_to_string(&instance).expect("cannot write instance");

    assert_eq!(content, "NODE_COORD_SECTION\n1 1.5 -2.25\nDEMAND_SECTION\nDEPOT_SECTION\n-1\nEOF\n");
}

#[test]
fn can_read_written_instance_back() {
    let instance = InstanceBuilder::default()
        .capacity(100)
        .edge_weight_type("GEO")
        .add_node("3", (0.1, 0.2), Some(10), false)
        .add_node("1", (123.456, -7.000001), Some(0), true)
        .add_node("2", (1e-7, 42.), None, false)
        .add_node("4", (5., 5.), Some(3), true)
        .build();

    let content = write_to_string(&instance).expect("cannot write instance");
    let parsed = InstanceParser::default().parse_str(&content).expect("cannot parse instance");

    assert_eq!(parsed, instance);
}

parameterized_test! {can_reject_ids_which_cannot_be_read_back, (id, is_depot, expected), {
    let instance = InstanceBuilder::default().add_node(id, (0., 0.), None, is_depot).build();

    let result = write_to_string(&instance);

    assert_eq!(result, Err(expected.into()));
}}

can_reject_ids_which_cannot_be_read_back! {
    case01_empty: ("", false, "node id cannot be written as a single token: ''"),
    case02_whitespace: ("a b", false, "node id cannot be written as a single token: 'a b'"),
    case03_depot_not_integer: ("depot", true, "depot id is expected to be a non-negative integer in canonical form, got: 'depot'"),
    case04_depot_leading_zero: ("01", true, "depot id is expected to be a non-negative integer in canonical form, got: '01'"),
    case05_depot_terminator: ("-1", true, "depot id is expected to be a non-negative integer in canonical form, got: '-1'"),
    case06_capacity: ("CAPACITY", false, "node id is reserved by the format: 'CAPACITY'"),
    case07_capacity_part: ("VEHICLE_CAPACITY", false, "node id is reserved by the format: 'VEHICLE_CAPACITY'"),
    case08_edge_weight_type: ("EDGE_WEIGHT_TYPE", false, "node id is reserved by the format: 'EDGE_WEIGHT_TYPE'"),
    case09_unsupported_section: ("X_SECTION", false, "node id is reserved by the format: 'X_SECTION'"),
    case10_known_section: ("n_DEMAND_SECTION_1", false, "node id is reserved by the format: 'n_DEMAND_SECTION_1'"),
    case11_end_of_file: ("EOF", false, "node id is reserved by the format: 'EOF'"),
}

parameterized_test! {can_reject_edge_weight_type_which_cannot_be_read_back, edge_weight_type, {
    let instance =
        InstanceBuilder::default().edge_weight_type(edge_weight_type).add_node("1", (0., 0.), None, true).build();

    let result = write_to_string(&instance);

    assert_eq!(result, Err(format!("edge weight type cannot be read back: '{edge_weight_type}'").into()));
}}

can_reject_edge_weight_type_which_cannot_be_read_back! {
    case01_empty: "",
    case02_directive_name: "EDGE_WEIGHT_TYPE",
    case03_not_a_word: "EUC 2D",
    case04_non_ascii: "EUC_2Dé",
    case05_capacity: "CAPACITY_2D",
    case06_section: "NODE_COORD_SECTION",
}

#[test]
fn can_read_back_ids_which_only_resemble_keywords() {
    let instance = InstanceBuilder::default()
        .capacity(10)
        .edge_weight_type("EUC_2D")
        .add_node("1", (0., 0.), Some(0), true)
        .add_node("SECTION", (1., 1.), Some(3), false)
        .add_node("EOF_1", (2., 2.), Some(4), false)
        .add_node("capacity", (3., 3.), None, false)
        .build();

    let content = write_to_string(&instance).expect("cannot write instance");
    let parsed = InstanceParser::default().parse_str(&content).expect("cannot parse instance");

    assert_eq!(parsed, instance);
}
