use crate::terminal::Terminal;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// 按顺序物化为`Vec`。
pub struct ToVec<I> {
    iter: I,
}

impl<I: Iterator> ToVec<I> {
    pub fn new(iter: I) -> Self {
        ToVec { iter }
    }
}

impl<I: Iterator> Terminal for ToVec<I> {
    type Output = Vec<I::Item>;

    fn execute(self) -> Self::Output {
        let mut out = Vec::with_capacity(self.iter.size_hint().0);
        out.extend(self.iter);
        out
    }
}

/// 物化为键值映射，重复的键以最后写入的值为准。
pub struct ToDictionary<I, KF, VF> {
    iter: I,
    key_fn: KF,
    value_fn: VF,
}

impl<I: Iterator, KF, VF> ToDictionary<I, KF, VF> {
    pub fn new<K, V>(iter: I, key_fn: KF, value_fn: VF) -> Self
    where
        KF: FnMut(&I::Item) -> K,
        VF: FnMut(I::Item) -> V,
    {
        ToDictionary { iter, key_fn, value_fn }
    }
}

impl<I, KF, VF, K, V> Terminal for ToDictionary<I, KF, VF>
where
    I: Iterator,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
    K: Eq + Hash,
{
    type Output = FxHashMap<K, V>;

    fn execute(mut self) -> Self::Output {
        let mut map = FxHashMap::default();
        for item in self.iter {
            let key = (self.key_fn)(&item);
            map.insert(key, (self.value_fn)(item));
        }
        map
    }
}

/// 按键分组，组内保持元素的原始顺序。
pub struct GroupBy<I, KF> {
    iter: I,
    key_fn: KF,
}

impl<I: Iterator, KF> GroupBy<I, KF> {
    pub fn new<K>(iter: I, key_fn: KF) -> Self
    where
        KF: FnMut(&I::Item) -> K,
    {
        GroupBy { iter, key_fn }
    }
}

impl<I, KF, K> Terminal for GroupBy<I, KF>
where
    I: Iterator,
    KF: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Output = FxHashMap<K, Vec<I::Item>>;

    fn execute(mut self) -> Self::Output {
        let mut groups: FxHashMap<K, Vec<I::Item>> = FxHashMap::default();
        for item in self.iter {
            groups.entry((self.key_fn)(&item)).or_default().push(item);
        }
        groups
    }
}
