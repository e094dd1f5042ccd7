//! Property-based tests for the game models.

use proptest::prelude::*;

use game_models::{
    BattleOfSexes, BattleOfSexesParams, BlottoParams, BlottoStrategy, Choice, ColonelBlotto, Coordination,
    CoordinationParams, Dictator, DictatorParams, DilemmaParams, GameModel, HawkDove, HawkDoveParams,
    PrisonersDilemma, PublicGoods, PublicGoodsParams, ReceiverStrategy, RepeatedParams, RepeatedPrisonersDilemma,
    SeededRng, SenderStrategy, Signaling, StagHunt, StagHuntParams, Trust, TwoActionGame, Ultimatum, UltimatumParams,
};

/// Strategy: finite payoff value in a realistic range.
fn payoff_strategy() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::First), Just(Choice::Second)]
}

fn blotto_strategy() -> impl Strategy<Value = BlottoStrategy> {
    prop_oneof![
        Just(BlottoStrategy::Equal),
        Just(BlottoStrategy::FrontLoaded),
        Just(BlottoStrategy::BackLoaded),
        Just(BlottoStrategy::Random),
    ]
}

proptest! {
    // 1. Symmetric games give mirrored payoffs when the players swap
    #[test]
    fn symmetric_games_mirror(
        reward in payoff_strategy(), temptation in payoff_strategy(),
        sucker in payoff_strategy(), punishment in payoff_strategy(),
        a in choice_strategy(), b in choice_strategy(),
    ) {
        let pd = PrisonersDilemma::new(DilemmaParams { reward, temptation, sucker, punishment }).unwrap();
        let (p1, p2) = pd.payoff(a, b);
        let (q1, q2) = pd.payoff(b, a);
        prop_assert_eq!((p1, p2), (q2, q1));

        let hd = HawkDove::new(HawkDoveParams { value: reward, cost: temptation }).unwrap();
        let (p1, p2) = hd.payoff(a, b);
        let (q1, q2) = hd.payoff(b, a);
        prop_assert_eq!((p1, p2), (q2, q1));

        let sh = StagHunt::new(StagHuntParams { stag: reward, hare: temptation, fail: sucker }).unwrap();
        let (p1, p2) = sh.payoff(a, b);
        let (q1, q2) = sh.payoff(b, a);
        prop_assert_eq!((p1, p2), (q2, q1));

        let co = Coordination::new(CoordinationParams { option_a: reward, option_b: temptation, mismatch: punishment }).unwrap();
        let (p1, p2) = co.payoff(a, b);
        let (q1, q2) = co.payoff(b, a);
        prop_assert_eq!((p1, p2), (q2, q1));
    }

    // 1b. Battle of Sexes mirrors once the man's and woman's payoffs trade places
    #[test]
    fn battle_of_sexes_mirrors_with_swapped_roles(
        opera_man in payoff_strategy(), opera_woman in payoff_strategy(),
        football_man in payoff_strategy(), football_woman in payoff_strategy(),
        a in choice_strategy(), b in choice_strategy(),
    ) {
        let game = BattleOfSexes::new(BattleOfSexesParams { opera_man, opera_woman, football_man, football_woman }).unwrap();
        let swapped = BattleOfSexes::new(BattleOfSexesParams {
            opera_man: opera_woman,
            opera_woman: opera_man,
            football_man: football_woman,
            football_woman: football_man,
        })
        .unwrap();
        let (p1, p2) = game.payoff(a, b);
        let (q1, q2) = swapped.payoff(b, a);
        prop_assert_eq!((p1, p2), (q2, q1));
    }

    // 2. Play by index agrees with play by choice and rejects anything past 1
    #[test]
    fn play_index_bounds(i in 0usize..4, j in 0usize..4) {
        let pd = PrisonersDilemma::default();
        let result = pd.play(i, j);
        if i < 2 && j < 2 {
            prop_assert_eq!(result.unwrap(), pd.payoff(Choice::ALL[i], Choice::ALL[j]));
        } else {
            prop_assert!(result.is_err());
        }
    }

    // 3. The dictator split is conserved and clamped
    #[test]
    fn dictator_conserves_total(total in 0.0..1000.0f64, given in -500.0..1500.0f64) {
        let game = Dictator::new(DictatorParams { total_amount: total }).unwrap();
        let (kept, received) = game.play(given);
        prop_assert!((kept + received - total).abs() < 1e-9);
        prop_assert!(kept >= 0.0 && received >= 0.0);
        prop_assert!(received <= total);
    }

    // 4. Ultimatum: accepted offers split the pie, rejections pay nothing
    #[test]
    fn ultimatum_all_or_nothing(total in 0.0..100.0f64, offer in -10.0..110.0f64, threshold in -10.0..110.0f64) {
        let game = Ultimatum::new(UltimatumParams { total_amount: total }).unwrap();
        let (p, r) = game.play(offer, threshold);
        prop_assert!(((p, r) == (0.0, 0.0)) || ((p + r - total).abs() < 1e-9));
        prop_assert!(p >= 0.0 && r >= 0.0);
    }

    // 5. Trust: the trustee never ends with less than zero, the pot never shrinks
    #[test]
    fn trust_payoffs_non_negative(sent in -5.0..20.0f64, ratio in -0.5..1.5f64) {
        let game = Trust::default();
        let (investor, trustee) = game.play(sent, ratio);
        prop_assert!(investor >= 0.0);
        prop_assert!(trustee >= 0.0);
        prop_assert!(investor + trustee >= 10.0 - 1e-9);
    }

    // 6. Public goods: free riders always earn at least as much as contributors
    #[test]
    fn public_goods_free_rider_advantage(c in prop::collection::vec(0.0..10.0f64, 4)) {
        let game = PublicGoods::new(PublicGoodsParams::default()).unwrap();
        let payoffs = game.play(&c).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if c[i] <= c[j] {
                    prop_assert!(payoffs[i] >= payoffs[j] - 1e-9);
                }
            }
        }
    }

    // 7. Signaling receiver payoff is a convex combination of its two outcomes
    #[test]
    fn signaling_receiver_bounded(s in 0u8..4, r in 0u8..4) {
        let game = Signaling::default();
        let (_, receiver) = game.play(SenderStrategy::try_from(s).unwrap(), ReceiverStrategy::try_from(r).unwrap());
        prop_assert!((2.0 - 1e-9..=6.0 + 1e-9).contains(&receiver));
    }

    // 8. Generated Blotto allocations are always legal and spend everything
    #[test]
    fn blotto_allocations_valid(
        resources in 0i64..200, battlefields in 1usize..8,
        strategy in blotto_strategy(), seed in any::<u64>(),
    ) {
        let game = ColonelBlotto::new(BlottoParams { resources, battlefields }).unwrap();
        let allocation = game.generate_allocation(strategy, &mut SeededRng::new(seed));
        if battlefields > 1 || matches!(strategy, BlottoStrategy::Equal | BlottoStrategy::Random) {
            prop_assert_eq!(allocation.iter().sum::<i64>(), resources);
        }
        prop_assert_eq!(allocation.len(), battlefields);
        prop_assert!(allocation.iter().all(|a| *a >= 0));
        prop_assert!(game.compare(&allocation, &allocation).is_ok());
    }

    // 9. Swapping Blotto allocations swaps the winner
    #[test]
    fn blotto_compare_antisymmetric(seed in any::<u64>(), s1 in blotto_strategy(), s2 in blotto_strategy()) {
        let game = ColonelBlotto::default();
        let mut rng = SeededRng::new(seed);
        let a = game.generate_allocation(s1, &mut rng);
        let b = game.generate_allocation(s2, &mut rng);
        let forward = game.compare(&a, &b).unwrap();
        let backward = game.compare(&b, &a).unwrap();
        prop_assert_eq!(forward.wins_1, backward.wins_2);
        prop_assert_eq!(forward.wins_2, backward.wins_1);
        prop_assert!(forward.wins_1 + forward.wins_2 <= 3);
    }

    // 10. Repeated matches are deterministic and weight rounds geometrically
    #[test]
    fn repeated_match_deterministic(s1 in 0u8..5, s2 in 0u8..5, rounds in 0u32..30, discount in 0.0..=1.0f64) {
        let game = RepeatedPrisonersDilemma::new(RepeatedParams { rounds, discount_factor: discount, ..Default::default() }).unwrap();
        let a = game.play_ids(s1, s2).unwrap();
        let b = game.play_ids(s1, s2).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.rounds.len(), rounds as usize);
        prop_assert_eq!(a.history1.len(), rounds as usize);
        for (r, round) in a.rounds.iter().enumerate() {
            prop_assert!((round.discount - discount.powi(r as i32)).abs() < 1e-9);
        }
    }

    // 11. Parameters report what the model was built with
    #[test]
    fn parameters_reflect_construction(value in 0.0..50.0f64, cost in 0.0..50.0f64) {
        let game = HawkDove::new(HawkDoveParams { value, cost }).unwrap();
        let params = game.parameters();
        prop_assert_eq!(params["value"], value);
        prop_assert_eq!(params["cost"], cost);
    }
}
