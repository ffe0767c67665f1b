use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use draughts101::game_state::board::Board;
use draughts101::game_state::draughts_types::{Color, Piece};
use draughts101::move_generation::bitboard_move_generator::BitboardMoveGenerator;
use draughts101::move_generation::legal_move_generator::LegalMoveGenerator;
use draughts101::move_generation::move_generator::MoveGenerator;
use draughts101::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    pieces: &'static [(u8, Piece)],
    side: Color,
    depth: u8,
}

const WM: Piece = Piece::man(Color::White);
const BM: Piece = Piece::man(Color::Black);
const WK: Piece = Piece::king(Color::White);
const BK: Piece = Piece::king(Color::Black);

/// Open middlegame with kings on both sides and capture pressure.
const KINGS_MIDDLEGAME: &[(u8, Piece)] = &[
    (7, BM),
    (11, BM),
    (12, BM),
    (16, BM),
    (19, BK),
    (22, BM),
    (27, WM),
    (31, WM),
    (32, WM),
    (36, WM),
    (38, WK),
    (42, WM),
];

fn case_board(case: &BenchCase) -> Board {
    if case.pieces.is_empty() {
        Board::new_game()
    } else {
        Board::from_pieces(case.pieces).expect("benchmark position should be valid")
    }
}

fn selected_cases() -> Vec<BenchCase> {
    let deep = matches!(
        std::env::var("DRAUGHTS_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    );
    let extra = u8::from(deep);
    vec![
        BenchCase {
            name: "startpos",
            pieces: &[],
            side: Color::White,
            depth: 4 + extra,
        },
        BenchCase {
            name: "kings_middlegame",
            pieces: KINGS_MIDDLEGAME,
            side: Color::White,
            depth: 3 + extra,
        },
    ]
}

fn bench_generator<G: MoveGenerator>(c: &mut Criterion, label: &str, generator: &G) {
    let mut group = c.benchmark_group(format!("perft_{label}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = case_board(&case);

        // Correctness guard: both generators must agree before timing.
        let expected = perft(&LegalMoveGenerator, &board, case.side, case.depth)
            .expect("perft should run");
        let warmup = perft(generator, &board, case.side, case.depth).expect("perft should run");
        assert_eq!(
            warmup, expected,
            "generator mismatch for {} depth {}",
            case.name, case.depth
        );
        if case.pieces.is_empty() {
            let shallow = perft(generator, &board, case.side, 2).expect("perft should run");
            assert_eq!(shallow.nodes, 81, "start position depth 2");
        }

        group.throughput(Throughput::Elements(expected.nodes as u64));
        let bench_name = format!("{}_d{}", case.name, case.depth);
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_name),
            &expected.nodes,
            |b, expected_nodes| {
                b.iter(|| {
                    let depth = black_box(case.depth);
                    let count = perft(generator, black_box(&board), case.side, depth)
                        .expect("perft benchmark run should succeed");
                    assert_eq!(count.nodes, *expected_nodes);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    bench_generator(c, "dense", &LegalMoveGenerator);
    bench_generator(c, "bitboard", &BitboardMoveGenerator);
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
