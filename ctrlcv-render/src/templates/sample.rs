//! Example listings written when input files are missing.

/// Three journals with their article titles.
pub const SAMPLE_JOURNALS: &str = "\
- ACM:
    名称: ACM计算概览
    文章:
        - 神经网络崛起
        - 量子计算综述
- IEEE:
    名称: IEEE汇刊
    文章:
        - 5G网络安全
        - 物联网协议分析
- Nature:
    名称: 自然通讯
    文章:
        - 基因编辑进展
";

/// Five papers, one exercising authors, keywords and a multi-line abstract.
pub const SAMPLE_PAPERS: &str = "\
- 神经网络崛起:
    标题: 神经网络崛起
    年份: 2023
    期刊: ACM
    DOI: 10.1145/123456
    作者:
        - 张三:
            第一作者: 是
            单位: 清华大学
        - 李四:
            第一作者: 否
            单位: 北京大学
    关键词:
        - 神经网络
        - 深度学习
        - 人工智能
    摘要: |
        本文系统回顾了神经网络近年来的发展历程。
        从早期的感知机模型到如今的深度学习架构，
        神经网络在计算机视觉、自然语言处理等领域
        取得了突破性进展。研究重点包括卷积神经网络、
        循环神经网络、注意力机制等核心技术的演进。
- 量子计算综述:
    标题: 量子计算综述
    年份: 2022
    期刊: ACM
- 5G网络安全:
    标题: 5G网络安全
    年份: 2021
    期刊: IEEE
- 物联网协议分析:
    标题: 物联网协议分析
    年份: 2020
    期刊: IEEE
- 基因编辑进展:
    标题: 基因编辑进展
    年份: 2023
    期刊: Nature
";
