//! Thread-local scratch arenas.
//!
//! Three arenas back the allocation-free hot paths: `divmod` for the
//! long-division workspace, `power` for the sliding-window lookup table,
//! and `karatsuba` for the recursion's sum/z1 regions. An operation
//! computes its worst-case need up front, borrows the arena when the
//! need fits, and falls back to a one-shot heap buffer otherwise, so
//! changing the sizes below affects performance only, never semantics.
//!
//! Arenas are strictly thread-local; concurrent use of the library from
//! several threads never contends on them.

use core::cell::RefCell;

use crate::big_digit::BigDigit;

/// Size of the division workspace arena, in limbs.
pub const DIVMOD_BUFFER_SIZE: usize = 2048;
/// Size of the exponentiation lookup-table arena, in limbs.
pub const POWER_BUFFER_SIZE: usize = 2048;
/// Size of the Karatsuba recursion arena, in limbs.
pub const KARATSUBA_BUFFER_SIZE: usize = 2048;

thread_local! {
    static DIVMOD_BUFFER: RefCell<Vec<BigDigit>> = RefCell::new(Vec::new());
    static POWER_BUFFER: RefCell<Vec<BigDigit>> = RefCell::new(Vec::new());
    static KARATSUBA_BUFFER: RefCell<Vec<BigDigit>> = RefCell::new(Vec::new());
}

/// Run `f` on a zeroed buffer of `needed` limbs, borrowing the
/// thread-local arena when `needed <= size` (and the arena is not
/// already on the stack), heap-allocating otherwise.
fn with_buffer<R, F>(
    arena: &'static std::thread::LocalKey<RefCell<Vec<BigDigit>>>,
    size: usize,
    needed: usize,
    f: F,
) -> R
where
    F: FnOnce(&mut [BigDigit]) -> R,
{
    let mut f = Some(f);
    if needed <= size {
        let reused = arena.with(|cell| {
            let mut borrow = cell.try_borrow_mut().ok()?;
            if borrow.is_empty() {
                borrow.resize(size, 0);
            } else {
                borrow[..needed].fill(0);
            }
            let f = f.take().unwrap();
            Some(f(&mut borrow[..needed]))
        });
        if let Some(result) = reused {
            return result;
        }
    }
    let mut heap = vec![0; needed];
    (f.take().unwrap())(&mut heap)
}

/// Division workspace: `needed` limbs, zeroed.
pub(crate) fn with_divmod_buffer<R>(needed: usize, f: impl FnOnce(&mut [BigDigit]) -> R) -> R {
    with_buffer(&DIVMOD_BUFFER, DIVMOD_BUFFER_SIZE, needed, f)
}

/// Sliding-window lookup table storage: `needed` limbs, zeroed.
pub(crate) fn with_power_buffer<R>(needed: usize, f: impl FnOnce(&mut [BigDigit]) -> R) -> R {
    with_buffer(&POWER_BUFFER, POWER_BUFFER_SIZE, needed, f)
}

/// Karatsuba recursion scratch: `needed` limbs, zeroed.
pub(crate) fn with_karatsuba_buffer<R>(needed: usize, f: impl FnOnce(&mut [BigDigit]) -> R) -> R {
    with_buffer(&KARATSUBA_BUFFER, KARATSUBA_BUFFER_SIZE, needed, f)
}
