//! Performance benchmarks for recording games into a season

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rivalry_ledger::league::League;
use rivalry_ledger::season::{Game, Season};

const TEAM_COUNT: usize = 32;

fn create_bench_league() -> (League, Vec<String>) {
    let mut league = League::new();
    let names: Vec<String> = (0..TEAM_COUNT).map(|i| format!("Team {:02}", i)).collect();
    for name in &names {
        league.add_team(name.clone()).unwrap();
    }
    (league, names)
}

fn create_bench_games(names: &[String], count: usize) -> Vec<Game> {
    (0..count)
        .map(|i| {
            let home = &names[i % names.len()];
            let away = &names[(i * 7 + 1) % names.len()];
            let away = if away == home {
                &names[(i + 1) % names.len()]
            } else {
                away
            };
            let mut game = Game::new(home.clone(), away.clone()).unwrap();
            game.set_score((i % 35) as i32, (i % 28) as i32).unwrap();
            game
        })
        .collect()
}

fn bench_add_game(c: &mut Criterion) {
    let (league, names) = create_bench_league();
    let games = create_bench_games(&names, 1000);

    c.bench_function("season_add_1000_games", |b| {
        b.iter(|| {
            let mut league = league.clone();
            let mut season = Season::new(2024);
            for game in &games {
                season.add_game(game.clone(), &mut league).unwrap();
            }
            black_box(season.rivalry_count())
        })
    });
}

fn bench_update_rivalries(c: &mut Criterion) {
    let (mut league, names) = create_bench_league();
    let mut season = Season::new(2024);
    for game in create_bench_games(&names, 1000) {
        season.add_game(game, &mut league).unwrap();
    }

    c.bench_function("season_rebuild_rivalries", |b| {
        b.iter(|| {
            season.update_rivalries().unwrap();
            black_box(season.rivalry_count())
        })
    });
}

criterion_group!(benches, bench_add_game, bench_update_rivalries);
criterion_main!(benches);
