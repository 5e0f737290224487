//! Benchmark for chunk meshing.
//!
//! Run with: cargo bench --package fe_geometry --bench mesh_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fe_core::{Dimensions, VoxelGrid};
use fe_geometry::MeshBuilder;

fn solid_grid(size: u32) -> VoxelGrid {
    let mut grid = VoxelGrid::new(Dimensions::cube(size)).expect("bench grid");
    grid.fill(true);
    grid
}

fn sparse_grid(size: u32, stride: usize) -> VoxelGrid {
    let mut grid = VoxelGrid::new(Dimensions::cube(size)).expect("bench grid");
    for index in (0..grid.len()).step_by(stride) {
        grid.set_enabled(index, true).expect("bench grid");
    }
    grid
}

fn benchmark_solid_chunks(c: &mut Criterion) {
    let builder = MeshBuilder::new();
    let mut group = c.benchmark_group("solid_chunk");

    for size in [8_u32, 16, 32] {
        let grid = solid_grid(size);
        group.throughput(Throughput::Elements(u64::from(size).pow(3)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(builder.build(black_box(grid))));
        });
    }

    group.finish();
}

fn benchmark_sparse_chunk(c: &mut Criterion) {
    let builder = MeshBuilder::new();
    let grid = sparse_grid(32, 10);

    c.bench_function("sparse_chunk_32_every_10th", |b| {
        b.iter(|| black_box(builder.build(black_box(&grid))));
    });
}

fn benchmark_empty_chunk(c: &mut Criterion) {
    let builder = MeshBuilder::new();
    let grid = sparse_grid(32, usize::MAX);

    c.bench_function("near_empty_chunk_32", |b| {
        b.iter(|| black_box(builder.build(black_box(&grid))));
    });
}

criterion_group!(
    benches,
    benchmark_solid_chunks,
    benchmark_sparse_chunk,
    benchmark_empty_chunk
);
criterion_main!(benches);
