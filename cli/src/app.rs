use std::{error::Error, path::Path, time::Instant};
use twoway_core::parsing::{Query, load_queries_file};
use twoway_core::{BidirectionalGraph, RoadNetwork};

use crate::args::Args;

pub struct TwowayApp {
    pub network: RoadNetwork,
    pub num_arcs: usize,
    pub load_duration: f64,
}

impl TwowayApp {
    pub fn load(args: &Args) -> Result<Self, Box<dyn Error>> {
        for path in [&args.graph, &args.coordinates] {
            if !path.exists() {
                return Err(format!("Input file does not exist: {:?}", path).into());
            }
        }

        let load_timer = Instant::now();
        let network = RoadNetwork::load(&args.graph, &args.coordinates)?;
        let load_duration = load_timer.elapsed().as_secs_f64();
        let num_arcs = network.graph.num_edges();

        tracing::debug!(
            vertices = network.graph.num_vertices(),
            arcs = num_arcs,
            seconds = load_duration,
            "loaded road network"
        );

        Ok(Self {
            network,
            num_arcs,
            load_duration,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.network.num_vertices()
    }

    pub fn load_queries(&self, path: &Path) -> Result<Vec<Query>, Box<dyn Error>> {
        Ok(load_queries_file(path, self.num_vertices())?)
    }
}
