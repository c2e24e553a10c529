// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use uvsynth::{
    array::AntennaArray,
    beam::NoBeam,
    coord::ENH,
    gridding::{grid_uv_samples, GridSpec, MaskType},
    imaging::{simulate_dirty_observation, sky2uv, uv2sky, ImagingConfig},
    sky::{GaussianSource, SkyModel},
    track::{uv_track_multiband, ObservationGeometry},
};

/// 64 antennas on a regular 8x8 grid, 20 m apart.
fn square_array() -> AntennaArray {
    let positions = (0..64)
        .map(|i| ENH::new((i % 8) as f64 * 20.0, (i / 8) as f64 * 20.0, 0.0))
        .collect();
    AntennaArray::new(positions).unwrap()
}

fn geometry(multi_band: bool) -> ObservationGeometry {
    ObservationGeometry::new(
        35_f64.to_radians(),
        32_f64.to_radians(),
        1.0,
        1.0,
        60,
        2e9,
        1e9,
        8,
        multi_band,
    )
    .unwrap()
}

fn tracks(c: &mut Criterion) {
    let baselines = square_array().baselines();
    let single = geometry(false);
    let multi = geometry(true);

    c.bench_function("uv track, 4032 baselines, 60 times", |b| {
        b.iter(|| uv_track_multiband(&baselines, &single))
    });
    c.bench_function("uv track, 4032 baselines, 60 times, 8 channels", |b| {
        b.iter(|| uv_track_multiband(&baselines, &multi))
    });
}

fn gridding(c: &mut Criterion) {
    let track = uv_track_multiband(&square_array().baselines(), &geometry(true));
    let spec = GridSpec::square(512, 1.0).unwrap();
    let weights = vec![0.5; track.len()];

    c.bench_function("grid binary", |b| {
        b.iter(|| grid_uv_samples(track.uvs(), spec, MaskType::Binary, None).unwrap())
    });
    c.bench_function("grid weighted", |b| {
        b.iter(|| {
            grid_uv_samples(track.uvs(), spec, MaskType::Weighted, Some(&weights)).unwrap()
        })
    });
}

fn imaging(c: &mut Criterion) {
    let sky = GaussianSource::new(0.0, 0.0, 0.02, 1.0)
        .unwrap()
        .brightness((512, 512), 1.0);

    c.bench_function("sky2uv 512x512", |b| b.iter(|| sky2uv(sky.view())));
    let uv = sky2uv(sky.view());
    c.bench_function("uv2sky 512x512", |b| b.iter(|| uv2sky(uv.view())));

    let track = uv_track_multiband(&square_array().baselines(), &geometry(false));
    let config = ImagingConfig {
        fov_deg: 1.0,
        mask_type: MaskType::Binary,
        noise_sigma: 0.01,
        seed: Some(1),
    };
    c.bench_function("simulate dirty observation 512x512", |b| {
        b.iter(|| {
            simulate_dirty_observation(
                sky.view(),
                track.uvs(),
                None,
                Some(&NoBeam),
                &config,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, tracks, gridding, imaging);
criterion_main!(benches);
