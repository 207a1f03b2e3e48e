use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use sweeper_core::{Grid, GridConfig, Move, RandomMineGenerator};

/// 20x20 board with both mines tucked into the top-left corner, leaving
/// one large blank region: the worst case for the cascade.
fn corner_mine_grid() -> Grid {
    let mut rows = vec![vec![0u16; 20]; 20];
    let mines = [(0usize, 0usize), (0, 1)];
    for &(mine_row, mine_col) in &mines {
        rows[mine_row][mine_col] |= 1;
    }
    for row in 0..20 {
        for col in 0..20 {
            let adjacent = mines
                .iter()
                .filter(|&&(mine_row, mine_col)| {
                    (mine_row, mine_col) != (row, col)
                        && mine_row.abs_diff(row) <= 1
                        && mine_col.abs_diff(col) <= 1
                })
                .count() as u16;
            rows[row][col] += adjacent << 3;
        }
    }
    Grid::from_rows(&rows).unwrap()
}

fn generation(c: &mut Criterion) {
    let config = GridConfig::new(20, 20, 99).unwrap();
    c.bench_function("generate_20x20_99", |b| {
        b.iter(|| Grid::generate(black_box(config), RandomMineGenerator::new(0xFEED)))
    });
}

fn cascade_reveal(c: &mut Criterion) {
    let grid = corner_mine_grid();
    c.bench_function("reveal_full_cascade", |b| {
        b.iter(|| grid.reveal_tile(black_box((19, 19))).unwrap())
    });
}

fn move_replay(c: &mut Criterion) {
    let grid = corner_mine_grid();
    let moves = [Move::flag(0, 0), Move::flag(0, 1), Move::reveal(19, 19)];
    c.bench_function("replay_three_moves", |b| {
        b.iter(|| grid.replay(black_box(moves)).unwrap())
    });
}

criterion_group!(benches, generation, cascade_reveal, move_replay);
criterion_main!(benches);
