use spatio_kdtree::{Config, KdTree, KdTreeBuilder, Point, PointTable, Region, SearchOrder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see search statistics)
    env_logger::init();

    println!("=== spatio-kdtree - Getting Started ===\n");

    // === BASIC SYMBOL TABLE ===
    println!("1. Insert and Lookup");
    println!("--------------------");

    let mut tree = KdTree::new();
    tree.insert(Point::new(0.7, 0.2), "A")?;
    tree.insert(Point::new(0.5, 0.4), "B")?;
    tree.insert(Point::new(0.9, 0.6), "C")?;
    tree.insert(Point::new(0.2, 0.3), "D")?;
    tree.insert(Point::new(0.4, 0.7), "E")?;

    println!("   Stored {} points, tree height {}", tree.len(), tree.height());
    println!("   Value at (0.5, 0.4): {:?}", tree.get(&Point::new(0.5, 0.4))?);
    println!("   Contains (0.1, 0.1): {}\n", tree.contains(&Point::new(0.1, 0.1))?);

    // === RANGE SEARCH ===
    println!("2. Range Search");
    println!("---------------");

    let query = Region::new(0.0, 0.0, 0.6, 0.6);
    println!("   Points inside {}:", query);
    for point in tree.range(&query)? {
        println!("     - ({}, {})", point.x(), point.y());
    }
    println!();

    // === NEAREST NEIGHBOR ===
    println!("3. Nearest Neighbor");
    println!("-------------------");

    let target = Point::new(0.4, 0.8);
    if let Some((point, label)) = tree.nearest_entry(&target)? {
        let distance = tree.nearest_distance(&target)?.unwrap_or_default();
        println!(
            "   Closest to ({}, {}) is {} at ({}, {}), distance {:.3}\n",
            target.x(),
            target.y(),
            label,
            point.x(),
            point.y(),
            distance
        );
    }

    // === PARTITION ===
    println!("4. Partition Regions");
    println!("--------------------");
    for (point, region) in tree.regions() {
        println!("   ({}, {}) covers {}", point.x(), point.y(), region);
    }
    println!();

    // === CONFIGURATION ===
    println!("5. Configuration");
    println!("----------------");

    let config = Config::from_json(r#"{ "nearest_order": "lower_first", "depth_warning": 8 }"#)?;
    println!("   Loaded config: {:?}", config);

    let chain = KdTreeBuilder::new()
        .config(config)
        .points((0..16).map(|i| (Point::new(i as f64, i as f64), i)))
        .build()?;
    println!(
        "   Sorted insertion of {} points produced height {} (see the warning above)",
        chain.len(),
        chain.height()
    );
    assert_eq!(chain.config().nearest_order, SearchOrder::LowerFirst);

    // === BASELINE ===
    println!("\n6. Brute-Force Baseline");
    println!("-----------------------");

    let mut table = PointTable::new();
    for (point, label) in tree.iter() {
        table.insert(point, *label)?;
    }
    println!(
        "   Baseline nearest to ({}, {}): {:?}",
        target.x(),
        target.y(),
        table.nearest(&target)?
    );

    Ok(())
}
