/// 拼接：先产出`first`的全部元素，再产出`second`的全部元素。
///
/// 持有两个上游，分别记录是否已耗尽，已耗尽的一侧不再被拉取。
pub struct Concat<A, B> {
    first: A,
    second: B,
    exhausted_first: bool,
    exhausted_second: bool,
}

impl<A, B> Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Concat { first, second, exhausted_first: false, exhausted_second: false }
    }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.exhausted_first {
            match self.first.next() {
                Some(item) => return Some(item),
                None => self.exhausted_first = true,
            }
        }
        if !self.exhausted_second {
            match self.second.next() {
                Some(item) => return Some(item),
                None => self.exhausted_second = true,
            }
        }
        None
    }
}
