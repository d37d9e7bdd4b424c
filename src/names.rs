// ランダムなメソッド名の生成

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 生成する名前の文字数
pub const NAME_LENGTH: usize = 10;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// 英小文字のみからなる名前を `count` 個生成する
///
/// 各文字は独立に一様抽出するため、名前同士の重複もあり得る。
pub fn generate_names<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            (0..NAME_LENGTH)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect()
}

/// 乱数源を保持する名前ジェネレーター
#[derive(Debug, Clone)]
pub struct NameGenerator {
    rng: StdRng,
}

impl NameGenerator {
    /// シードを指定して作成 (再現可能)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// OSのエントロピーから作成
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// シードがあればシード付き、なければエントロピーから作成
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::with_seed)
    }

    pub fn generate(&mut self, count: usize) -> Vec<String> {
        generate_names(count, &mut self.rng)
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
