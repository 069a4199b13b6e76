use aoc_demos::chiton::Chiton;

aoc_puzzle::puzzle_main!(2021, 15, Chiton);
