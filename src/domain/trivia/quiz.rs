//! Trivia Context - Quiz
//!
//! 出题规则:
//! - 排除客户端已答过的题目
//! - 分类 id 为 0 表示不限分类
//! - 在候选集合中均匀随机抽取一题，随机源由调用方注入

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use super::Question;

/// 不限分类的哨兵值
pub const ANY_CATEGORY: i64 = 0;

/// 测验出题范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// 所有分类
    Any,
    /// 指定分类
    Category(i64),
}

impl QuizScope {
    pub fn from_category_id(id: i64) -> Self {
        if id == ANY_CATEGORY {
            QuizScope::Any
        } else {
            QuizScope::Category(id)
        }
    }

    /// 分类过滤条件，`Any` 时为 None
    pub fn category_id(&self) -> Option<i64> {
        match self {
            QuizScope::Any => None,
            QuizScope::Category(id) => Some(*id),
        }
    }

    pub fn admits(&self, question: &Question) -> bool {
        match self {
            QuizScope::Any => true,
            QuizScope::Category(id) => question.belongs_to(*id),
        }
    }
}

/// 从候选题目中随机抽取下一题
///
/// 候选集合为空（题目已答完）时返回 None
pub fn pick_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous_questions: &[i64],
    scope: QuizScope,
    rng: &mut R,
) -> Option<Question> {
    let asked: HashSet<i64> = previous_questions.iter().copied().collect();

    candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id) && scope.admits(q))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn pool() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 2),
            question(4, 3),
            question(5, 1),
        ]
    }

    #[test]
    fn test_scope_from_zero_is_any() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::Any);
        assert_eq!(QuizScope::from_category_id(4), QuizScope::Category(4));
        assert_eq!(QuizScope::Any.category_id(), None);
        assert_eq!(QuizScope::Category(4).category_id(), Some(4));
    }

    #[test]
    fn test_pick_respects_category() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_question(pool(), &[], QuizScope::Category(1), &mut rng).unwrap();
            assert_eq!(picked.category, 1);
        }
    }

    #[test]
    fn test_pick_never_returns_previous_question() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous = [1, 2, 3];
        for _ in 0..50 {
            let picked = pick_question(pool(), &previous, QuizScope::Any, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn test_pick_returns_none_when_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous = [1, 2, 5];
        assert!(pick_question(pool(), &previous, QuizScope::Category(1), &mut rng).is_none());
        assert!(pick_question(Vec::new(), &[], QuizScope::Any, &mut rng).is_none());
    }

    #[test]
    fn test_pick_is_deterministic_for_same_seed() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);

        for _ in 0..10 {
            let left = pick_question(pool(), &[], QuizScope::Any, &mut a);
            let right = pick_question(pool(), &[], QuizScope::Any, &mut b);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_pick_covers_every_candidate() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let picked = pick_question(pool(), &[], QuizScope::Any, &mut rng).unwrap();
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), 5);
    }
}
