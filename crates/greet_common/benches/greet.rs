use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greet_common::{
    greet::v1::{
        greet_service_client::GreetServiceClient, greet_service_server::GreetServiceServer,
        GreetRequest,
    },
    server::GreeterService,
};
use hrpc::{
    client::transport::mock::Mock as MockClient,
    common::transport::mock::new_mock_channels,
    exports::futures_util::future::join_all,
    server::transport::{mock::Mock as MockServer, Transport},
};
use tokio::runtime::Runtime;

fn bench_request() -> GreetRequest {
    GreetRequest {
        name: "BenchUser".to_string(),
    }
}

fn bench_greet(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    // Serve once, outside the measured loops
    let (tx, rx) = new_mock_channels();
    rt.spawn(MockServer::new(rx).serve(GreetServiceServer::new(GreeterService)));
    let mut client = GreetServiceClient::new_transport(MockClient::new(tx));

    c.bench_function("greet sequential", |b| {
        b.iter_custom(|iterations| {
            let start = Instant::now();

            rt.block_on(async {
                for _ in 0..iterations {
                    let response = client.greet(bench_request()).await.unwrap();
                    black_box(response.into_message().await.unwrap());
                }
            });

            start.elapsed()
        });
    });

    let mut group = c.benchmark_group("greet concurrent");
    for concurrency in [8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(concurrency),
            &concurrency,
            |b, &concurrency| {
                b.iter_custom(|iterations| {
                    let start = Instant::now();

                    rt.block_on(async {
                        for _ in 0..iterations {
                            let calls = (0..concurrency)
                                .map(|_| client.greet(bench_request()))
                                .collect::<Vec<_>>();
                            for response in join_all(calls).await {
                                black_box(response.unwrap().into_message().await.unwrap());
                            }
                        }
                    });

                    start.elapsed()
                });
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_greet
}

criterion_main!(benches);
