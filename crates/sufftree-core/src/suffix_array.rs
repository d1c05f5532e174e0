//! Reference suffix and LCP arrays.
//!
//! The suffix array is built by prefix doubling in O(n log² n). The LCP array
//! uses Kasai's linear pass over it. Both work on raw symbols and make no
//! assumption about a sentinel. The LCP-based tree constructor consumes them.

/// Start positions of all suffixes of `symbols`, in lexicographic order.
pub fn suffix_array(symbols: &[u8]) -> Vec<usize> {
    let n = symbols.len();
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = symbols.iter().map(|&s| s as usize).collect();
    let mut next = vec![0; n];
    let mut k = 1;

    while n > 1 {
        // Suffixes shorter than `k` sort before everything sharing their rank.
        let key = |i: usize, rank: &[usize]| (rank[i], rank.get(i + k).map_or(0, |&r| r + 1));

        sa.sort_unstable_by_key(|&i| key(i, &rank));

        next[sa[0]] = 0;
        for w in 1..n {
            let bump = key(sa[w - 1], &rank) < key(sa[w], &rank);
            next[sa[w]] = next[sa[w - 1]] + usize::from(bump);
        }
        std::mem::swap(&mut rank, &mut next);

        if rank[sa[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }

    sa
}

/// Longest common prefix of each suffix with its predecessor in `sa`.
///
/// `lcp[0]` is always `0`.
pub fn lcp_array(symbols: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = symbols.len();
    let mut rank = vec![0; n];
    for (r, &i) in sa.iter().enumerate() {
        rank[i] = r;
    }

    let mut lcp = vec![0; n];
    let mut h = 0;
    for i in 0..n {
        if rank[i] == 0 {
            h = 0;
            continue;
        }
        let j = sa[rank[i] - 1];
        while i + h < n && j + h < n && symbols[i + h] == symbols[j + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
