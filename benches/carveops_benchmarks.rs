//! Performance benchmarks for carveops
//!
//! Measures the per-iteration primitives (energy, seam search, seam
//! removal) and the full object-removal loop, to track regressions in the
//! O(W*H) passes.

use carveops::{
    find_horizontal_seam, find_vertical_seam, gradient_energy, masked_energy, remove_seam, Image,
    ObjectRemover, SeamCarveResize,
};
use criterion::*;
use image::{Luma, Rgb};
use itertools::iproduct;
use std::hint::black_box;

/// Helper function to create a test RGB image with realistic texture
fn create_rgb_image(width: u32, height: u32) -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(width, height);

    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let r = ((x * 255) / width) as u8;
        let g = ((y * 255) / height) as u8;
        let b = ((x * 31 + y * 17) % 256) as u8;
        image.put_pixel(x, y, Rgb([r, g, b]));
    });

    image
}

/// Helper function to create a centered rectangular object mask
fn create_object_mask(width: u32, height: u32) -> Image<Luma<u8>> {
    let mut mask: Image<Luma<u8>> = Image::new(width, height);

    iproduct!(height / 4..height * 3 / 4, width * 2 / 5..width * 3 / 5).for_each(|(y, x)| {
        mask.put_pixel(x, y, Luma([255]));
    });

    mask
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for size in [64u32, 128, 256] {
        let image = create_rgb_image(size, size);
        let mask = create_object_mask(size, size);

        group.bench_with_input(BenchmarkId::new("gradient", size), &image, |b, image| {
            b.iter(|| gradient_energy(black_box(image)));
        });
        group.bench_with_input(
            BenchmarkId::new("masked", size),
            &(image, mask),
            |b, (image, mask)| {
                b.iter(|| masked_energy(black_box(image), black_box(mask)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_seam_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam_search");

    for size in [64u32, 128, 256] {
        let energy = gradient_energy(&create_rgb_image(size, size));

        group.bench_with_input(BenchmarkId::new("vertical", size), &energy, |b, energy| {
            b.iter(|| find_vertical_seam(black_box(energy)));
        });
        group.bench_with_input(
            BenchmarkId::new("horizontal", size),
            &energy,
            |b, energy| {
                b.iter(|| find_horizontal_seam(black_box(energy)));
            },
        );
    }

    group.finish();
}

fn bench_seam_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam_removal");

    for size in [64u32, 128, 256] {
        let image = create_rgb_image(size, size);
        let seam = find_vertical_seam(&gradient_energy(&image));

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(image, seam),
            |b, (image, seam)| {
                b.iter(|| remove_seam(black_box(image), black_box(seam)));
            },
        );
    }

    group.finish();
}

fn bench_object_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_removal");
    group.sample_size(10);

    for size in [64u32, 96] {
        let image = create_rgb_image(size, size);
        let mask = create_object_mask(size, size);

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(image, mask),
            |b, (image, mask)| {
                b.iter(|| {
                    ObjectRemover::new()
                        .remove_object(black_box(image.clone()), black_box(mask.clone()))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.sample_size(10);

    let image = create_rgb_image(128, 96);
    group.bench_function("shrink_both_axes", |b| {
        b.iter(|| {
            black_box(image.clone())
                .seam_carve_resize(112, 84)
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_energy,
    bench_seam_search,
    bench_seam_removal,
    bench_object_removal,
    bench_resize
);
criterion_main!(benches);
