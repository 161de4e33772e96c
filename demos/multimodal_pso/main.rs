use bhramari::prelude::*;
use bhramari::swarms::TrackingSwarmObserver;
use bhramari::test_functions::MultimodalSine;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn Error>> {
    let tracker = TrackingSwarmObserver::build();
    let mut pso: PSO = PSO::new()
        .configure(|c| {
            c.with_omega(0.5).with_c1(1.0).with_c2(2.0).with_seed(0).setup_swarm(|s| {
                s.with_n_particles(50)
                    .with_bounds(vec![(-10.0, 10.0), (-10.0, 10.0)])
            })
        })
        .with_observer(tracker.clone());
    let summary = pso.run(&MultimodalSine, &mut (), 300)?;
    println!("{}", summary);

    // dump the swarm history for the plotting script
    let file = File::create("swarm_history.pkl")?;
    serde_pickle::to_writer(
        &mut BufWriter::new(file),
        &*tracker.read(),
        serde_pickle::SerOptions::new(),
    )?;
    Ok(())
}
