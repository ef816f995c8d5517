use wayfinder_core::{Graph, GraphBuilder};

#[must_use]
pub fn triangle() -> Graph {
    Graph::new(
        ["A", "B", "C"],
        [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
    )
    .expect("triangle must build")
}

/// Road distances (km) between twelve South American countries.
#[must_use]
pub fn road_network() -> Graph {
    const EDGES: &[(&str, &str, f64)] = &[
        ("Argentina", "Bolivia", 1824.0),
        ("Argentina", "Brazil", 2239.0),
        ("Argentina", "Chile", 1140.0),
        ("Argentina", "Paraguay", 1002.0),
        ("Argentina", "Uruguay", 950.0),
        ("Bolivia", "Brazil", 1477.0),
        ("Bolivia", "Chile", 1702.0),
        ("Bolivia", "Paraguay", 1210.0),
        ("Bolivia", "Peru", 1086.0),
        ("Brazil", "Colombia", 2456.0),
        ("Brazil", "Guyana", 2460.0),
        ("Brazil", "Paraguay", 1331.0),
        ("Brazil", "Peru", 3012.0),
        ("Brazil", "Suriname", 2798.0),
        ("Brazil", "Uruguay", 1769.0),
        ("Brazil", "Venezuela", 2193.0),
        ("Chile", "Peru", 2344.0),
        ("Colombia", "Ecuador", 1287.0),
        ("Colombia", "Peru", 1887.0),
        ("Colombia", "Venezuela", 1022.0),
        ("Ecuador", "Peru", 1324.0),
        ("Guyana", "Suriname", 285.0),
        ("Guyana", "Venezuela", 1536.0),
        ("Paraguay", "Uruguay", 1114.0),
    ];
    let mut builder = GraphBuilder::new().with_nodes([
        "Argentina",
        "Bolivia",
        "Brazil",
        "Chile",
        "Colombia",
        "Ecuador",
        "Guyana",
        "Paraguay",
        "Peru",
        "Suriname",
        "Uruguay",
        "Venezuela",
    ]);
    for &(left, right, weight) in EDGES {
        builder.add_edge(left, right, weight);
    }
    builder.build().expect("road network must build")
}
