use maze_pathfinding::{prelude::*, search::SearchError};
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 1001;

type Timings = Vec<(u128, Option<Cost>, usize)>;

fn main() {
    let mut rng = rand::thread_rng();

    let algorithms = [("dijkstra", Algorithm::Dijkstra), ("a_star", Algorithm::AStar)];

    let mut results: HashMap<&str, Timings> =
        algorithms.iter().map(|(name, _)| (*name, vec![])).collect();

    let last = SIZE as i32 - 2;
    let points = [(1, 1), (1, last), (last, 1), (last, last)];

    for _ in 0..10 {
        let config = MazeConfig {
            loop_factor: rng.gen_range(0..SIZE * 4),
            ..MazeConfig::with_size(SIZE, SIZE)
        };
        let start_time = Instant::now();
        let map = GridMap::new_maze(&config, &mut rng);
        println!(
            "finished Maze gen in {:.3}ms",
            duration_as_nanos(Instant::now() - start_time) as f64 / 1_000_000.0
        );

        let mut engine = SearchEngine::new(SearchConfig::UNBOUNDED);

        for &(name, algorithm) in &algorithms {
            let results = results.get_mut(name).unwrap();
            for i in 0..4 {
                for j in (0..4).filter(|x| *x != i) {
                    let start_time = Instant::now();
                    let path = engine.find_path(&map, points[i], points[j], algorithm);
                    let dt = duration_as_nanos(Instant::now() - start_time);
                    results.push((dt, path.ok().map(|p| p.cost), engine.iterations()));
                }
            }
        }

        let navigator = Navigator::new(map, SearchConfig::UNBOUNDED);
        let requests: Vec<(Point, Point)> = (0..4)
            .flat_map(|i| (0..4).filter(move |j| *j != i).map(move |j| (points[i], points[j])))
            .collect();
        let start_time = Instant::now();
        let parallel: Vec<Result<Path<Point>, SearchError>> =
            navigator.find_paths_parallel(&requests, Algorithm::AStar);
        let dt = duration_as_nanos(Instant::now() - start_time);
        let found = parallel.par_iter().filter(|path| path.is_ok()).count();
        println!(
            "parallel: {} of {} paths in {:.3}ms",
            found,
            requests.len(),
            dt as f64 / 1_000_000.0
        );
    }

    let best = results["dijkstra"]
        .iter()
        .map(|(_, cost, _)| *cost)
        .collect::<Vec<_>>();

    for (name, results) in results {
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap() as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap() as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1 == *b));

        let iterations = results.iter().map(|r| r.2);
        let min_iterations = iterations.clone().min().unwrap();
        let max_iterations = iterations.clone().max().unwrap();
        let avg_iterations = iterations.sum::<usize>() as f64 / results.len() as f64;

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {} - {} iterations; {:.1}",
            name, min_time, max_time, avg_time, min_iterations, max_iterations, avg_iterations,
        );
    }
}

fn duration_as_nanos(d: Duration) -> u128 {
    d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
