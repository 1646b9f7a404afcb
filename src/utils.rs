use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::entities::{Date, PostId};

pub(crate) trait LetChain {
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R;
}
impl<T> LetChain for T {
    #[inline]
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

pub(crate) trait AlsoChain {
    fn also_<F, R>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> R;
}
impl<T> AlsoChain for T {
    #[inline]
    fn also_<F, R>(mut self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> R,
    {
        f(&mut self);
        self
    }
}

pub trait Clock {
    fn now(&self) -> Date;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Date { Utc::now() }
}

/// always answers the same instant.
pub struct FixedClock(pub Date);
impl Clock for FixedClock {
    fn now(&self) -> Date { self.0 }
}

pub trait IdGenerator {
    fn generate(&self) -> PostId;
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 7;

/// `p_` followed by 7 random base-36 digits.
pub struct RandomIdGenerator;
impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> PostId {
        let mut n = ::uuid::Uuid::new_v4().as_u128();
        let mut suffix = String::with_capacity(ID_SUFFIX_LEN);

        for _ in 0..ID_SUFFIX_LEN {
            suffix.push(BASE36[(n % 36) as usize] as char);
            n /= 36;
        }

        PostId(format!("p_{}", suffix))
    }
}

/// `p_1`, `p_2`, ... in call order.
#[derive(Default)]
pub struct SequentialIdGenerator(AtomicU64);
impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> PostId {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        PostId(format!("p_{}", n))
    }
}

pub fn date_to_string(date: &Date) -> String { date.format("%Y-%m-%d %H:%M:%S").to_string() }
