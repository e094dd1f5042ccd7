//! Stateless one-shot games

mod bargaining;
mod matrix;
mod public_goods;
mod signaling;

pub use bargaining::{
    Dictator, DictatorParams, ProposerStrategy, ResponderStrategy, Trust, TrustLevel, TrustParams, Ultimatum,
    UltimatumParams,
};
pub use matrix::{
    BattleOfSexes, BattleOfSexesParams, Coordination, CoordinationParams, DilemmaParams, HawkDove, HawkDoveParams,
    PrisonersDilemma, StagHunt, StagHuntParams,
};
pub use public_goods::{PublicGoods, PublicGoodsParams};
pub use signaling::{Level, ReceiverStrategy, SenderStrategy, Signaling, SignalingParams};
