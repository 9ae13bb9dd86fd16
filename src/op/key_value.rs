/// 不可变的键值对。
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct KeyValuePair<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        KeyValuePair { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<KeyValuePair<K, V>> for (K, V) {
    fn from(pair: KeyValuePair<K, V>) -> Self {
        pair.into_parts()
    }
}

/// 将每个元素映射为键值对，先以引用计算键，再消耗元素计算值。
pub struct KeyValue<I, KF, VF> {
    iter: I,
    key_fn: KF,
    value_fn: VF,
}

impl<I, KF, VF> KeyValue<I, KF, VF>
where
    I: Iterator,
{
    pub fn new<K, V>(iter: I, key_fn: KF, value_fn: VF) -> Self
    where
        KF: FnMut(&I::Item) -> K,
        VF: FnMut(I::Item) -> V,
    {
        KeyValue { iter, key_fn, value_fn }
    }
}

impl<I, KF, VF, K, V> Iterator for KeyValue<I, KF, VF>
where
    I: Iterator,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
{
    type Item = KeyValuePair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let key = (self.key_fn)(&item);
        Some(KeyValuePair::new(key, (self.value_fn)(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
