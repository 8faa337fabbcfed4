//! Benchmarks for move validation and check detection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Board, Color, Square};
use chess_rules::session::GameSession;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_move");

    let board = Board::try_from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete_all_pairs", |b| {
        b.iter(|| {
            let mut valid = 0u32;
            for (from, piece) in board.pieces() {
                for to in Square::all() {
                    if board.is_valid_move(from, piece, to) {
                        valid += 1;
                    }
                }
            }
            black_box(valid)
        })
    });

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    let board = Board::try_from_fen(MIDDLEGAME).unwrap();
    group.bench_function("is_king_in_check", |b| {
        b.iter(|| black_box(board.is_king_in_check(black_box(Color::Black))))
    });

    let mut board = Board::try_from_fen(MIDDLEGAME).unwrap();
    let bishop = board.piece_at(Square(3, 2)).unwrap();
    group.bench_function("would_be_in_check", |b| {
        b.iter(|| {
            black_box(board.would_be_in_check(Square(3, 2), bishop, black_box(Square(6, 5))))
        })
    });

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves(Color::White)))
    });

    let mut kiwipete = Board::try_from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_moves(Color::White)))
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("select_queen", |b| {
        let mut session = GameSession::try_from_fen(KIWIPETE).unwrap();
        b.iter(|| black_box(session.try_select(2, 5)))
    });
}

criterion_group!(
    benches,
    bench_validator,
    bench_check,
    bench_legal_moves,
    bench_session
);
criterion_main!(benches);
