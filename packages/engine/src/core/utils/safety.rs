//! Zero-Cost Safety Macros
//!
//! Neighbor bookkeeping touches 8 cells per birth or death, so slice access
//! in those loops goes through `fast!`:
//! - Debug: normal indexing, panics with the offending index
//! - Release: `get_unchecked` / `get_unchecked_mut`
//!
//! Only use it where the index comes from the grid's own wrap tables.
//!
//! ```rust
//! use conway_engine::fast;
//!
//! let mut neighbors = vec![0u8; 9];
//! fast!(neighbors, [4] = 3);
//! assert_eq!(*fast!(neighbors, [4]), 3);
//! ```

#[macro_export]
macro_rules! fast {
    // Read: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
