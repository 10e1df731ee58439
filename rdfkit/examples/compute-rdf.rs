use rdfkit::{PairExclusion, RadialDistribution};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // load the trajectory and topology from command line argument
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("expected a path to a trajectory file");
    let first = args.next().unwrap_or_else(|| "all".into());
    let second = args.next().unwrap_or_else(|| first.clone());

    let (trajectory, topology) = rdfkit::trajectory::read_from_file(&path)?;

    // enable collection of profiling data
    time_graph::enable_data_collection(true);
    time_graph::clear_collected_data();

    // select pairs between atoms from different molecules
    let pairs = topology.select_pairs_by_name(&first, &second, PairExclusion::SameMolecule)?;

    // pass parameters as JSON, distances are in Ångströms
    let parameters = r#"{
        "r_min": 0.0,
        "r_max": 10.0,
        "bin_width": 0.05,
        "periodic": true
    }"#;
    let rdf = RadialDistribution::from_json(parameters)?;

    let curve = time_graph::spanned!("Full calculation", {
        rdf.compute(&trajectory, &pairs)?
    });

    println!("# {} pairs over {} frames", pairs.len(), trajectory.len());
    println!("# r g(r) count");
    for ((distance, value), count) in curve.iter().zip(curve.counts()) {
        println!("{:.4} {:.6} {}", distance, value, count);
    }

    // display the call graph (this requires the "table" feature for the
    // time_graph crate)
    let graph = time_graph::get_full_graph();
    eprintln!("{}", graph.as_short_table());

    Ok(())
}
