//! Built-in keyword tables for the grade 9 word list.
//!
//! Used when the embedded profile file cannot be parsed.

pub const PROFILE_NAME: &str = "grade9";
pub const AUDIENCE: &str = "初三学生";

pub const MIN_ENTRIES: usize = 80;
pub const MAX_ENTRIES: usize = 120;

pub const VERB_TAG: &str = "verbe";

pub const SOCIAL_LIFE: &[&str] = &[
    "你好", "谢谢", "再见", "家庭", "朋友", "学校", "老师", "学生", "课程", "作业", "考试",
    "成绩", "图书馆", "学习", "课本", "课间休息", "校长", "讲座", "今天", "昨天", "明天",
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日", "早上", "下午",
    "晚上", "城市", "国家", "街道", "商店", "市场", "餐厅", "汽车", "公交车", "火车", "飞机",
    "船",
];

pub const CULTURE_TRAVEL: &[&str] = &[
    "护照", "酒店", "接待处", "房间", "钥匙", "电梯", "行李箱", "城堡", "博物馆", "雕像", "票",
    "城市地图", "露营", "相机", "背包", "双筒望远镜", "导游", "游客", "纪念品",
];

pub const ADJECTIVE: &[&str] = &[
    "奇怪的", "壮丽的", "美味的", "有趣的", "容易的", "困难的", "大的", "小的", "好的", "坏的",
    "美丽的", "漂亮的", "长的", "短的", "年轻的", "老的", "强的", "弱的", "聪明的", "愚蠢的",
    "干净的", "脏的", "热的", "冷的", "新的", "旧的", "昂贵的", "便宜的", "更多", "更少",
    "同样多",
];

/// Grammar meta-vocabulary that is beyond the target level
pub const ADVANCED_TERMS: &[&str] = &["虚词", "主动态", "被动态", "将来完成时", "虚拟式"];
