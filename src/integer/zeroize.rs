#![cfg(feature = "zeroize")]

use crate::integer::{Integer, Sign};

impl zeroize::Zeroize for Integer {
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.data.clear();
        self.sign = Sign::NoSign;
    }
}
