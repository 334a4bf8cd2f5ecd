//! World lifecycle over the real market environment and trading agents

use agora_agents::{ScriptedRandom, StdRandom, create_trader};
use agora_clock::ManualClock;
use agora_core::{Decision, NewsItem, Sentiment, Ticker};
use agora_market::{PricePathConfig, PricePathGenerator, StockTradingEnvBuilder};
use agora_ports::{Actor, NewsFeed};
use agora_world::{RandomActionPolicy, StepResult, World, WorldConfig, WorldError};

fn tickers() -> Vec<Ticker> {
    ["AAPL", "MSFT", "AMZN", "TSLA", "GOOGL"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn traders() -> Vec<Box<dyn Actor>> {
    vec![
        Box::new(create_trader("AliceTrader", "conservative", 0.2, Box::new(StdRandom::seeded(1)))),
        Box::new(create_trader("BobTrader", "balanced", 0.5, Box::new(StdRandom::seeded(2)))),
        Box::new(create_trader("EveTrader", "aggressive", 0.8, Box::new(StdRandom::seeded(3)))),
    ]
}

fn market_data(days: usize) -> agora_core::MarketData {
    PricePathGenerator::new(PricePathConfig {
        days,
        seed: Some(42),
        ..Default::default()
    })
    .generate(&tickers())
    .unwrap()
}

/// Feed that always fails upstream and so reports nothing
struct DeadFeed;

impl NewsFeed for DeadFeed {
    fn fetch_latest(&mut self, _keywords: &[String]) -> Vec<NewsItem> {
        Vec::new()
    }
}

#[test]
fn three_agents_ten_steps_fifteen_calls() {
    let _ = env_logger::try_init();

    let config = WorldConfig::default().with_max_steps(10).with_news(false, 60);
    let mut world = World::new(config, traders(), ManualClock::new(None))
        .with_action_policy(Box::new(RandomActionPolicy::new(Box::new(StdRandom::seeded(9)))));
    world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(50))
        .unwrap();

    let mut terminal_calls = 0;
    for _ in 0..15 {
        if world.step(None).unwrap().is_terminal() {
            terminal_calls += 1;
        }
    }

    assert_eq!(terminal_calls, 5);
    assert_eq!(world.history().len(), 10);
    assert!(world.get_state().unwrap().terminal);
    assert!(world.history().iter().all(|s| s.decisions.len() == 3));
}

#[test]
fn observation_shape_follows_tickers() {
    let config = WorldConfig::default().with_max_steps(3).with_news(false, 60);
    let mut world = World::new(config, Vec::new(), ManualClock::new(None));

    let state = world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(10))
        .unwrap();

    // cash, five prices, five holdings
    assert_eq!(state.observation.len(), 11);
    assert_eq!(state.observation[0], 1e5);
}

#[test]
fn reset_after_trading_returns_to_start() {
    let config = WorldConfig::default().with_max_steps(5).with_news(false, 60);
    let mut world = World::new(config, traders(), ManualClock::new(None));
    let initial = world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(20))
        .unwrap();

    world.step(Some(vec![10, 0, 0, 0, 5])).unwrap();
    world.step(None).unwrap();
    assert_ne!(world.get_state().unwrap(), initial);

    let state = world.reset().unwrap();

    assert_eq!(state.step, 0);
    assert_eq!(state.observation, initial.observation);
    assert!(state.news.is_empty());
}

#[test]
fn too_many_actions_surface_as_environment_error() {
    let config = WorldConfig::default()
        .with_tickers(&["AAPL"])
        .with_max_steps(5)
        .with_news(false, 60);
    let mut world = World::new(config, Vec::new(), ManualClock::new(None));
    world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(5))
        .unwrap();

    let err = world.step(Some(vec![1, 2])).unwrap_err();

    assert!(matches!(err, WorldError::Environment(_)));
}

#[test]
fn failed_news_refresh_does_not_abort_step() {
    let clock = ManualClock::new(None);
    let config = WorldConfig::default().with_max_steps(5).with_news(true, 1);
    let mut world =
        World::new(config, traders(), clock.clone()).with_news_feed(Box::new(DeadFeed));
    world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(10))
        .unwrap();

    clock.advance(chrono::Duration::seconds(5));
    let result = world.step(None).unwrap();

    assert!(matches!(result, StepResult::Advanced(_)));
    assert!(world.news().is_empty());
}

#[test]
fn scripted_buyer_trades_through_world() {
    // Every roll buys the first candidate
    let buyer = create_trader("Buyer", "aggressive", 0.9, Box::new(ScriptedRandom::new([0.0])));
    let config = WorldConfig::default().with_max_steps(3).with_news(false, 60);
    let mut world = World::new(config, vec![Box::new(buyer)], ManualClock::new(None));
    world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(10))
        .unwrap();

    for _ in 0..3 {
        world.step(None).unwrap();
    }

    let trades: usize = world.history().iter().map(|s| s.trades()).sum();
    assert_eq!(trades, 3);
    match &world.history()[0].decisions[0].decision {
        Decision::Trade { ticker, .. } => assert_eq!(ticker, "AAPL"),
        other => panic!("expected trade, got {:?}", other),
    }
}

#[test]
fn news_items_reach_agents_on_refresh() {
    struct OneHeadline;

    impl NewsFeed for OneHeadline {
        fn fetch_latest(&mut self, _keywords: &[String]) -> Vec<NewsItem> {
            vec![NewsItem::new(
                "Stock market rally",
                "wire",
                Sentiment::Positive,
                chrono::Utc::now(),
            )]
        }
    }

    let clock = ManualClock::new(None);
    let config = WorldConfig::default().with_max_steps(5).with_news(true, 10);
    let mut world =
        World::new(config, Vec::new(), clock.clone()).with_news_feed(Box::new(OneHeadline));
    world
        .initialize(&StockTradingEnvBuilder::default(), &market_data(10))
        .unwrap();

    clock.advance(chrono::Duration::seconds(10));
    world.step(None).unwrap();

    assert_eq!(world.get_state().unwrap().news.len(), 1);
}
