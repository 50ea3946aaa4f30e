use evacuation_routing::evacuation::builder::maximum_throughput;

fn main() {
    env_logger::init();

    let corridors = vec![
        vec![0, 0, 4, 6, 0, 0],
        vec![0, 0, 5, 2, 0, 0],
        vec![0, 0, 0, 0, 4, 4],
        vec![0, 0, 0, 0, 6, 6],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ];

    match maximum_throughput(&[0, 1], &[4, 5], &corridors) {
        Ok(total) => println!("maximum throughput: {}", total),
        Err(err) => eprintln!("bad input: {}", err),
    }
}
