use criterion::{black_box, criterion_group, criterion_main, Criterion};
use variant_sudoku::grid::SudokuGrid;

const CLASSIC_PUZZLE: &str = "\
53..7....\
6..195...\
.98....6.\
8...6...3\
4..8.3..1\
7...2...6\
.6....28.\
...419..5\
....8..79";

fn propagate_classic(c: &mut Criterion) {
    let grid = SudokuGrid::parse_text(
        &CLASSIC_PUZZLE
            .as_bytes()
            .chunks(9)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
    )
    .expect("benchmark puzzle text is well-formed");

    c.bench_function("solve classic puzzle", |b| {
        b.iter(|| {
            let mut board = grid.to_board().expect("benchmark puzzle has no contradictory givens");
            black_box(board.solve()).ok();
        })
    });
}

criterion_group!(benches, propagate_classic);
criterion_main!(benches);
