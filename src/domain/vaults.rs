//! Static vault and lending market tables

use alloy_primitives::address;

use super::vault::{vault, VaultDefinition};

/// Yearn vaults and the Pickle jar reachable through the zapper.
pub static YEARN_VAULTS: [VaultDefinition; 85] = [
    vault(address!("0xbfa4d8aa6d8a379abfe7793399d3ddacc5bbecbb"), "DAI", "yvDAI", 18),
    vault(address!("0xe2f6b9773bf3a015e2aa70741bde1498bdb9425b"), "USDC", "yvUSDC", 6),
    vault(address!("0xe11ba472f74869176652c35d30db89854b5ae84d"), "HEGIC", "yvHEGIC", 18),
    vault(address!("0x19d3364a399d251e894ac732651be8b0e4e85001"), "DAI", "yvDAI", 18),
    vault(address!("0x5f18c75abdae578b483e5f43f12a39cf75b973a9"), "USDC", "yvUSDC", 6),
    vault(address!("0xdcd90c7f6324cfa40d7169ef80b12031770b4325"), "stETH", "yvCurve-stETH", 18),
    vault(address!("0xcb550a6d4c8e3517a939bc79d0c7093eb7cf56b5"), "WBTC", "yvWBTC", 8),
    vault(address!("0x986b4aff588a109c09b50a03f42e4110e29d353f"), "sETH", "yvCurve-sETH", 18),
    vault(address!("0xa9fe4601811213c340e850ea305481aff02f5b28"), "WETH", "yvWETH", 18),
    vault(address!("0xe14d13d8b3b85af791b2aadd661cdbd5e6097db1"), "YFI", "yvYFI", 18),
    vault(address!("0xb8c3b7a2a618c552c23b1e4701109a9e756bab67"), "1INCH", "yv1INCH", 18),
    vault(address!("0x27b7b1ad7288079a66d12350c828d3c00a6f07d7"), "IronBank", "yvCurve-IronBank", 18),
    vault(address!("0x625b7df2fa8abe21b0a976736cda4775523aed1e"), "HBTC", "yvCurve-HBTC", 18),
    vault(address!("0x9d409a0a012cfba9b15f6d4b36ac57a46966ab9a"), "yveCRV", "yvBOOST", 18),
    vault(address!("0x8414db07a7f743debafb402070ab01a4e0d2e45e"), "sBTC", "yvCurve-sBTC", 18),
    vault(address!("0x7047f90229a057c13bf847c0744d646cfb6c9e1a"), "renBTC", "yvCurve-renBTC", 18),
    vault(address!("0xb4d1be44bff40ad6e506edf43156577a3f8672ec"), "sAave", "yvCurve-sAave", 18),
    vault(address!("0xe9dc63083c464d6edccff23444ff3cfc6886f6fb"), "oBTC", "yvCurve-oBTC", 18),
    vault(address!("0x3c5df3077bcf800640b5dae8c91106575a4826e6"), "pBTC", "yvCurve-pBTC", 18),
    vault(address!("0x5fa5b62c8af877cb37031e0a3b2f34a78e3c56a6"), "LUSD", "yvCurve-LUSD", 18),
    vault(address!("0x8fa3a9ecd9efb07a8ce90a6eb014cf3c0e3b32ef"), "BBTC", "yvCurve-BBTC", 18),
    vault(address!("0x23d3d0f1c697247d5e0a9efb37d8b0ed0c464f7f"), "tBTC", "yvCurve-tBTC", 18),
    vault(address!("0x7da96a3891add058ada2e826306d812c638d87a7"), "USDT", "yvUSDT", 6),
    vault(address!("0xa696a63cc78dffa1a63e9e50587c197387ff6c7e"), "WBTC", "yvWBTC", 8),
    vault(address!("0xb4ada607b9d6b2c9ee07a275e9616b84ac560139"), "FRAX", "yvCurve-FRAX", 18),
    vault(address!("0xfbeb78a723b8087fd2ea7ef1afec93d35e8bed42"), "UNI", "yvUNI", 18),
    vault(address!("0x8ee57c05741aa9db947a744e713c15d4d19d8822"), "yBUSD", "yvCurve-yBUSD", 18),
    vault(address!("0xd6ea40597be05c201845c0bfd2e96a60bacde267"), "COMP", "yvCurve-Compound", 18),
    vault(address!("0x2a38b9b0201ca39b17b460ed2f11e4929559071e"), "GUSD", "yvCurve-GUSD", 18),
    vault(address!("0x4b5bfd52124784745c1071dcb244c6688d2533d3"), "y", "yUSD", 18),
    vault(address!("0x84e13785b5a27879921d6f685f041421c7f482da"), "3pool", "yvCurve-3pool", 18),
    vault(address!("0xf8768814b88281de4f532a3beefa5b85b69b9324"), "TUSD", "yvCurve-TUSD", 18),
    vault(address!("0x6ede7f19df5df6ef23bd5b9cedb651580bdf56ca"), "BUSD", "yvCurve-BUSD", 18),
    vault(address!("0x30fcf7c6cdfc46ec237783d94fc78553e79d4e9c"), "DUSD", "yvCurve-DUSD", 18),
    vault(address!("0x1c6a9783f812b3af3abbf7de64c3cd7cc7d1af44"), "UST", "yvCurve-UST", 18),
    vault(address!("0x8cc94ccd0f3841a468184aca3cc478d2148e1757"), "mUSD", "yvCurve-mUSD", 18),
    vault(address!("0xa5ca62d95d24a4a350983d5b8ac4eb8638887396"), "sUSD", "yvsUSD", 18),
    vault(address!("0xf29ae508698bdef169b89834f76704c3b205aedf"), "SNX", "yvSNX", 18),
    vault(address!("0x5a770dbd3ee6baf2802d29a901ef11501c44797a"), "sUSD", "yvCurve-sUSD", 18),
    vault(address!("0xf2db9a7c0acd427a680d640f02d90f6186e71725"), "LINK", "yvCurve-LINK", 18),
    vault(address!("0x3b96d491f067912d18563d56858ba7d6ec67a6fa"), "USDN", "yvCurve-USDN", 18),
    vault(address!("0xc4daf3b5e2a9e93861c3fbdd25f1e943b8d87417"), "USDP", "yvCurve-USDP", 18),
    vault(address!("0xa74d4b67b3368e83797a35382afb776baae4f5c8"), "alUSD", "yvCurve-alUSD", 18),
    vault(address!("0xbfedbcbe27171c418cdabc2477042554b1904857"), "rETH", "yvCurve-rETH", 18),
    vault(address!("0x132d8d2c76db3812403431facb00f3453fc42125"), "ankrETH", "yvCurve-ankrETH", 18),
    vault(address!("0x39caf13a104ff567f71fd2a4c68c026fdb6e740b"), "Aave", "yvCurve-Aave", 18),
    vault(address!("0x054af22e1519b020516d72d749221c24756385c9"), "HUSD", "yvCurve-HUSD", 18),
    vault(address!("0x25212df29073fffa7a67399acefc2dd75a831a1a"), "EURS", "yvCurve-EURS", 18),
    vault(address!("0x671a912c10bba0cfa74cfc2d6fba9ba1ed9530b2"), "LINK", "yvLINK", 18),
    vault(address!("0x873fb544277fd7b977b196a826459a69e27ea4ea"), "RAI", "yvRAI", 18),
    vault(address!("0xa258c4606ca8206d8aa700ce2143d7db854d168c"), "WETH", "yvWETH", 18),
    vault(address!("0x3d980e50508cfd41a13837a60149927a11c03731"), "triCrypto", "yvCurve-triCrypto", 18),
    vault(address!("0x80bbee2fa460da291e796b9045e93d19ef948c6a"), "Pax", "yvCurve-Pax", 18),
    vault(address!("0x28a5b95c101df3ded0c0d9074db80c438774b6a9"), "USDT", "yvCurve-USDT", 18),
    vault(address!("0x3d27705c64213a5dcd9d26880c1bcfa72d5b6b0e"), "USDK", "yvCurve-USDK", 18),
    vault(address!("0xc116df49c02c5fd147de25baa105322ebf26bd97"), "RSV", "yvCurve-RSV", 18),
    vault(address!("0xda816459f1ab5631232fe5e97a05bbbb94970c95"), "DAI", "yvDAI", 18),
    vault(address!("0xe537b5cc158eb71037d4125bdd7538421981e6aa"), "3Crypto", "yvCurve-3Crypto", 18),
    vault(address!("0xd9788f3931ede4d5018184e198699dc6d66c1915"), "AAVE", "yvAAVE", 18),
    vault(address!("0x4a3fe75762017db0ed73a71c9a06db7768db5e66"), "COMP", "yvCOMP", 18),
    vault(address!("0x6d765cbe5bc922694afe112c140b8878b9fb0390"), "SUSHI", "yvSUSHI", 18),
    vault(address!("0xfd0877d9095789caf24c98f7cce092fa8e120775"), "TUSD", "yvTUSD", 18),
    vault(address!("0x0d4ea8536f9a13e4fba16042a46c30f092b06aa5"), "EURT", "yvCurve-EURT", 18),
    vault(address!("0x2dfb14e32e2f8156ec15a2c21c3a6c053af52be8"), "MIM", "yvCurve-MIM", 18),
    vault(address!("0x4560b99c904aad03027b5178cca81584744ac01f"), "cvxCRV", "yvCurve-cvxCRV", 18),
    vault(address!("0x67e019bfbd5a67207755d04467d6a70c0b75bf60"), "ibEUR", "yvCurve-ibEUR", 18),
    vault(address!("0x528d50dc9a333f01544177a924893fa1f5b9f748"), "ibKRW", "yvCurve-ibKRW", 18),
    vault(address!("0x595a68a8c9d5c230001848b69b1947ee2a607164"), "ibGBP", "yvCurve-ibGBP", 18),
    vault(address!("0x1b905331f7de2748f4d6a0678e1521e20347643f"), "ibAUD", "yvCurve-ibAUD", 18),
    vault(address!("0x490bd0886f221a5f79713d3e84404355a9293c50"), "ibCHF", "yvCurve-ibCHF", 18),
    vault(address!("0x59518884eebfb03e90a18adbaaab770d4666471e"), "ibJPY", "yvCurve-ibJPY", 18),
    vault(address!("0xdb25ca703181e7484a155dd612b06f57e12be5f0"), "YFI", "yvYFI", 18),
    vault(address!("0x6fafca7f49b4fd9dc38117469cd31a1e5aec91f5"), "USDM", "yvCurve-USDM", 18),
    vault(address!("0x718abe90777f5b778b52d553a5abaa148dd0dc5d"), "alETH", "yvCurve-alETH", 18),
    vault(address!("0x8b9c0c24307344b6d7941ab654b2aeee25347473"), "EURN", "yvCurve-EURN", 18),
    vault(address!("0xd8c620991b8e626c099eaab29b1e3eea279763bb"), "MIMUST", "yvCurve-MIMUST", 18),
    vault(address!("0xc5bddf9843308380375a611c18b50fb9341f502a"), "CRV", "yveCRV", 18),
    vault(address!("0xda481b277dce305b97f4091bd66595d57cf31634"), "Pickle SLP", "pSLPyvBOOST-ETH", 18),
    vault(address!("0xa354f35829ae975e850e23e9615b11da1b3dc4de"), "USDC", "yvUSDC", 6),
    vault(address!("0xf59d66c1d593fb10e2f8c2a6fd2c958792434b9c"), "OUSD3CRV-f", "yvCurve-OUSD", 18),
    vault(address!("0x5e69e8b51b71c8596817fd442849bd44219bb095"), "ibBTC", "yvCurve-ibBTC", 18),
    vault(address!("0x16825039dfe2a5b01f3e1e6a2bbf9a576c6f95c4"), "D3-f", "yvCurve-d3pool", 18),
    vault(address!("0xbcbb5b54fa51e7b7dc920340043b203447842a6b"), "crvEURTUSD", "yvCurve-EURTUSD", 18),
    vault(address!("0x801ab06154bf539dea4385a39f5fa8534fb53073"), "crvEURSUSDC", "yvCurve-EURSUSDC", 18),
    vault(address!("0x378cb52b00f9d0921cb46dfc099cff73b42419dc"), "LUSD", "yvLUSD", 18),
];

/// Iron Bank lending markets. Decimals are those of the underlying asset.
pub static IRON_BANK_MARKETS: [VaultDefinition; 32] = [
    vault(address!("0x41c84c0e2ee0b740cf0d31f63f3b6f627dc6b393"), "WETH", "cyWETH", 18),
    vault(address!("0x8e595470ed749b85c6f7669de83eae304c2ec68f"), "DAI", "cyDAI", 18),
    vault(address!("0x7589c9e17bcfce1ccaa1f921196fda177f0207fc"), "Y3CRV", "cyY3CRV", 18),
    vault(address!("0xe7bff2da8a2f619c2586fb83938fa56ce803aa16"), "LINK", "cyLINK", 18),
    vault(address!("0xfa3472f7319477c9bfecdd66e4b948569e7621b9"), "YFI", "cyYFI", 18),
    vault(address!("0x12a9cc33a980daa74e00cc2d1a0e74c57a93d12c"), "SNX", "cySNX", 18),
    vault(address!("0x8fc8bfd80d6a9f17fb98a373023d72531792b431"), "WBTC", "cyWBTC", 8),
    vault(address!("0x48759f220ed983db51fa7a8c0d2aab8f3ce4166a"), "USDT", "cyUSDT", 6),
    vault(address!("0x76eb2fe28b36b3ee97f3adae0c69606eedb2a37c"), "USDC", "cyUSDC", 6),
    vault(address!("0xbe86e8918dfc7d3cb10d295fc220f941a1470c5c"), "MUSD", "cyMUSD", 18),
    vault(address!("0x297d4da727fbc629252845e96538fc46167e453a"), "DUSD", "cyDUSD", 18),
    vault(address!("0xa8caea564811af0e92b1e044f3edd18fa9a73e4f"), "EURS", "cyEURS", 2),
    vault(address!("0xca55f9c4e77f7b8524178583b0f7c798de17fd54"), "SEUR", "cySEUR", 18),
    vault(address!("0x7736ffb07104c0c400bb0cc9a7c228452a732992"), "DPI", "cyDPI", 18),
    vault(address!("0x09bdcce2593f0bef0991188c25fb744897b6572d"), "BUSD", "cyBUSD", 18),
    vault(address!("0x9d029cd7cedcb194e2c361948f279f1788135bb2"), "CREAM", "cyCREAM", 18),
    vault(address!("0x4f12c9dabb5319a252463e6028ca833f1164d045"), "CDAI", "cyCDAI", 18),
    vault(address!("0xbb4b067cc612494914a902217cb6078ab4728e36"), "CUSDT", "cyCUSDT", 8),
    vault(address!("0x950027632fbd6adadfe82644bfb64647642b6c09"), "CUSDC", "cyCUSDC", 8),
    vault(address!("0xa7c4054afd3dbbbf5bfe80f41862b89ea05c9806"), "SUSD", "cySUSD", 18),
    vault(address!("0x1b3e95e8ecf7a7cab6c4de1b344f94865abd12d5"), "CHF", "cyCHF", 18),
    vault(address!("0xfeeb92386a055e2ef7c2b598c872a4047a7db59f"), "UNI", "cyUNI", 18),
    vault(address!("0x226f3738238932ba0db2319a8117d9555446102f"), "SUSHI", "cySUSHI", 18),
    vault(address!("0x30190a3b52b5ab1daf70d46d72536f5171f22340"), "AAVE", "cyAAVE", 18),
    vault(address!("0x00e5c0774a5f065c285068170b20393925c84bf3"), "EUR", "cyEUR", 18),
    vault(address!("0xb8c5af54bbdcc61453144cf472a9276ae36109f9"), "CRV", "cyCRV", 18),
    vault(address!("0x3c9f5385c288ce438ed55620938a4b967c080101"), "KRW", "cyKRW", 18),
    vault(address!("0x215f34af6557a6598dbda9aa11cc556f5ae264b1"), "JPY", "cyJPY", 18),
    vault(address!("0x86bbd9ac8b9b44c95ffc6baae58e25033b7548aa"), "AUD", "cyAUD", 18),
    vault(address!("0xecab2c76f1a8359a06fab5fa0ceea51280a97ecf"), "GBP", "cyGBP", 18),
    vault(address!("0x9e8e207083ffd5bdc3d99a1f32d1e6250869c1a9"), "MIM", "cyMIM", 18),
    vault(address!("0x672473908587b10e65dab177dbaeadcbb30bf40b"), "ZAR", "cyZAR", 18),
];
