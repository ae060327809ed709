use linear_scan::{find_all, find_first};

fn main() {
    let sample = [3, 5, 2, 5, 7];
    println!("sample: {sample:?}");
    println!("find_first(sample, 5) -> {}", find_first(&sample, &5));
    println!("find_first(sample, 4) -> {}", find_first(&sample, &4));
    println!("find_all(sample, 5) -> {:?}", find_all(&sample, &5));
}
