//! SHA-512 round primitives.
//!
//! The logical functions of FIPS 180-4 section 4.1.3 and the 80-round
//! mixing loop. The message schedule is kept as a rolling 16-word window
//! instead of a full 80-word array.

use super::{K512, State};

/// σ0, used by the message schedule.
#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// σ1, used by the message schedule.
#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Σ0, applied to `a` every round.
#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Σ1, applied to `e` every round.
#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Runs all 80 rounds over one block and feeds the result forward.
///
/// `w` holds the 16 big-endian words of the block; the remaining 64
/// schedule words are derived in place as the rounds progress. The
/// working registers are added back onto `state` at the end (the
/// Davies-Meyer feed-forward). All additions wrap modulo 2^64.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut State, mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (i, &k) in K512.iter().enumerate() {
        if i >= 16 {
            let w16 = w[(i - 16) & 15];
            let w15 = w[(i - 15) & 15];
            let w7 = w[(i - 7) & 15];
            let w2 = w[(i - 2) & 15];

            w[i & 15] = small_sigma1(w2)
                .wrapping_add(w7)
                .wrapping_add(small_sigma0(w15))
                .wrapping_add(w16);
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w[i & 15]);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Unrolled variant of [`all_rounds`], selected by the `speed` feature.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut State, mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($i:expr) => {{
            // SAFETY: every index is masked to 0..16 and `$i` is below 80,
            // the length of K512.
            unsafe {
                if $i >= 16 {
                    let w16 = *w.get_unchecked(($i - 16) & 15);
                    let w15 = *w.get_unchecked(($i - 15) & 15);
                    let w7 = *w.get_unchecked(($i - 7) & 15);
                    let w2 = *w.get_unchecked(($i - 2) & 15);

                    *w.get_unchecked_mut($i & 15) = small_sigma1(w2)
                        .wrapping_add(w7)
                        .wrapping_add(small_sigma0(w15))
                        .wrapping_add(w16);
                }

                let wi = *w.get_unchecked($i & 15);
                let ki = *K512.get_unchecked($i);

                let t1 = h
                    .wrapping_add(big_sigma1(e))
                    .wrapping_add(ch(e, f, g))
                    .wrapping_add(ki)
                    .wrapping_add(wi);

                let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

                h = g;
                g = f;
                f = e;
                e = d.wrapping_add(t1);
                d = c;
                c = b;
                b = a;
                a = t1.wrapping_add(t2);
            }
        }};
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);
    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
    R!(24);
    R!(25);
    R!(26);
    R!(27);
    R!(28);
    R!(29);
    R!(30);
    R!(31);

    R!(32);
    R!(33);
    R!(34);
    R!(35);
    R!(36);
    R!(37);
    R!(38);
    R!(39);
    R!(40);
    R!(41);
    R!(42);
    R!(43);
    R!(44);
    R!(45);
    R!(46);
    R!(47);

    R!(48);
    R!(49);
    R!(50);
    R!(51);
    R!(52);
    R!(53);
    R!(54);
    R!(55);
    R!(56);
    R!(57);
    R!(58);
    R!(59);
    R!(60);
    R!(61);
    R!(62);
    R!(63);

    R!(64);
    R!(65);
    R!(66);
    R!(67);
    R!(68);
    R!(69);
    R!(70);
    R!(71);
    R!(72);
    R!(73);
    R!(74);
    R!(75);
    R!(76);
    R!(77);
    R!(78);
    R!(79);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ch_selects_by_e() {
        let e = 0xffff_0000_ffff_0000;
        let f = 0x1234_5678_9abc_def0;
        let g = 0x0fed_cba9_8765_4321;
        assert_eq!(ch(e, f, g), (f & e) | (g & !e));
        assert_eq!(ch(u64::MAX, f, g), f);
        assert_eq!(ch(0, f, g), g);
    }

    #[test]
    fn maj_is_bitwise_majority() {
        assert_eq!(maj(0b1100, 0b1010, 0b0110), 0b1110);
        assert_eq!(maj(u64::MAX, 0, u64::MAX), u64::MAX);
        assert_eq!(maj(u64::MAX, 0, 0), 0);
    }

    #[test]
    fn sigmas_on_single_bit() {
        let x = 1u64;
        assert_eq!(small_sigma0(x), (1 << 63) | (1 << 56));
        assert_eq!(small_sigma1(x), (1 << 45) | (1 << 3));
        assert_eq!(big_sigma0(x), (1 << 36) | (1 << 30) | (1 << 25));
        assert_eq!(big_sigma1(x), (1 << 50) | (1 << 46) | (1 << 23));
    }

    #[test]
    fn sigmas_of_zero_are_zero() {
        let fns: [fn(u64) -> u64; 4] = [small_sigma0, small_sigma1, big_sigma0, big_sigma1];
        for f in fns {
            assert_eq!(f(0), 0);
        }
    }
}
