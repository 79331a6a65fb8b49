//! World Magnetic Model 2015, original release (December 2014).
//!
//! Unnormalized Gauss coefficients in nanotesla (secular variation in nanotesla per year),
//! packed with [`coefficient_index`](crate::coefficients::coefficient_index).
#![allow(clippy::excessive_precision)]

use crate::coefficients::ConstModel;

#[rustfmt::skip]
pub static WMM2015: ConstModel = ConstModel {
    epoch: 2015.0,
    main_field_coeff_c: [
        0.0, -29438.5, -2445.3, 1351.1,
        907.2, -232.6, 69.5, 81.6,
        24.0, 5.4, -1.9, 3.1,
        -2.0, -1501.1, 1739.2676859337475, -960.322453658145,
        257.31453320790104, 92.97742019795271, 14.707885801905887, -14.381548198001093,
        1.4333333333333331, 1.3118265467998769, -0.8764598212022148, -0.1846372364689991,
        -0.03396831102433787, 483.99273066166324, 158.2242796370603, 8.966632589774157,
        9.38815870176489, 2.511838636006169, -0.1748771299570375, -0.33665605829585415,
        0.04926223377768894, 0.00259499648053841, -0.024830427232533002, 0.00364965934300906,
        30.66882284086633, -6.673359735450364, -1.4043936159679125, -0.7464209133553132,
        0.1887584750541334, -0.007846531817819996, -0.00537495036163976, 0.0007633810206905742,
        0.0020197163363339116, 0.0009684786719132941, 0.49511953422845595, -0.36952022137296814,
        -0.03044713810352108, 0.008224396186997112, -0.0065210774307459494, 0.00011779224879003657,
        -7.711312805134473e-05, -7.901744265512675e-05, -5.587376953345928e-05, 0.00319228705617618,
        0.002954684201426394, 0.0008498542726563683, 0.0005838511040628811, -0.0003120815423275714,
        2.303057264678893e-05, 4.977631011946968e-06, 4.7911362107834415e-06, -0.0045813423970313604,
        -5.018025581454949e-05, 7.925226469630308e-05, -3.029289764645135e-07, -1.0602514176257971e-06,
        -5.750020635711086e-07, 4.7425370883909984e-08, 3.2091175418862035e-05, -1.978723788377687e-05,
        3.803990742829962e-06, 3.8572311040429634e-07, 1.731729695411081e-08, 2.2208964739434834e-08,
        -6.183511838680272e-07, -6.823734684648174e-07, 5.748933983403223e-08, 1.6884656654872546e-08,
        -1.7767171791547867e-09, -1.8558111802048348e-07, -7.298610579975181e-09, -2.564470354147122e-10,
        -1.9385573719060062e-10, -3.2640378796247345e-09, 7.914127330467462e-11, 1.193099586284436e-11,
        1.4763854141620308e-10, -7.916082160021906e-12, 0.0,
    ],
    main_field_coeff_s: [
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 4796.2, -1642.907926005999, -47.07102789048341,
        89.61894888917186, 12.238627374015437, -4.5171103278850415, -10.223938994899596,
        1.6999999999999997, -3.2199378875996976, 0.44497190922573976, -0.012309149097933274,
        -0.11322770341445958, -185.32943640986986, 31.629363994027234, -14.057414018548679,
        9.60773621817831, 1.1455088285083082, -0.49891416487743045, -0.3605606304825421,
        0.1716232660642066, -0.003892494720807615, 0.022671259647095352, 0.0045620741787613245,
        -28.370901074477306, 3.603614257143197, -1.1892524662877217, 0.33813212407775356,
        0.02036700308869262, 0.03236694374850748, 0.020286102977801673, 0.005852587825294402,
        -0.0006732387787779705, 0.0013409704688030226, -2.320652724442052, 0.03779717639202533,
        -0.06981843737531558, 0.013378351130848636, -0.0046217344897519835, -0.0013349788196204146,
        0.0005654962723765281, -9.657687435626604e-05, -0.00013658032552623381, 0.07431347309842688,
        0.0016340298992736878, 0.00030156119352322744, 0.0007111569838961407, -0.0001619069655684393,
        -0.00010702442582919562, 5.807236180604796e-06, 1.5970454035944803e-06, 0.004038559940965585,
        -0.0004928417981786111, 3.861007767255791e-05, 2.3628460164232055e-05, -9.087869293935405e-07,
        -1.6428630387745962e-07, 3.3197759618736983e-07, -1.1016373651251144e-05, -1.1253991546398094e-05,
        4.3724031526781175e-07, -7.530784536464832e-07, -1.818316180181635e-07, -4.441792947886967e-09,
        6.8018630225483e-07, -2.9244577219920745e-07, -6.998702240664794e-08, -1.4898226460181658e-08,
        1.33253788436609e-09, 1.502323336356295e-07, -4.460262021095944e-09, -3.2055879426839023e-09,
        9.692786859530031e-11, -7.888091542426441e-09, -3.957063665233731e-10, -5.3689481382799615e-11,
        -9.701961293064772e-11, -1.759129368893757e-12, 1.2567827257223882e-12,
    ],
    secular_var_coeff_c: [
        0.0, 10.7, -8.6, 3.1,
        -0.4, -0.2, -0.5, 0.2,
        0.0, 0.0, 0.0, 0.0,
        0.1, 17.9, -1.9052558883257649, -2.5311394008759507,
        0.2529822128134704, 0.025819888974716113, -0.04364357804719848, -0.03779644730092272,
        0.016666666666666666, -0.0149071198499986, 0.0, 0.0,
        0.0, 0.6928203230275508, -0.051639777949432225, -0.6857275130999355,
        -0.06831300510639733, -0.020701966780270625, -0.010286889997472794, -0.009960238411119947,
        -0.0015891043154093204, -0.001297498240269205, -0.0010795837927188264, 0.0,
        -0.5481281277625191, 0.07968190728895957, 0.0, 0.013801311186847085,
        0.004728054288446502, 0.0012260205965343744, 0.0006935419821470658, 0.0003816905103452871,
        9.617696839685295e-05, 7.44983593779457e-05, -0.029580398915498084, 0.0030519459198529767,
        -0.0011548914453059721, 0.00010965861582662818, -6.331143136646553e-05, -9.816020732503048e-05,
        -1.2852188008557456e-05, 0.0, -6.208196614828809e-06, 0.0028210908868533686,
        6.715191366878169e-05, -3.655287194220939e-05, 1.755943170113928e-05, -4.692955523722878e-06,
        -1.3547395674581724e-06, 0.0, 0.0, 9.692543858317405e-05,
        -1.612936794039091e-05, 1.3547395674581724e-06, 3.029289764645135e-07, -1.5146448823225676e-07,
        0.0, 4.7425370883909984e-08, 1.4369183023371058e-06, -4.946809470944218e-07,
        0.0, 0.0, 0.0, 0.0,
        9.275267758020409e-08, -1.4997219087138844e-08, -4.999073029046282e-09, 0.0,
        0.0, -1.7674392192427e-09, -4.054783655541767e-10, 0.0,
        0.0, -1.813354377569297e-10, -1.9785318326168656e-11, 0.0,
        -4.218244040462945e-12, 0.0, 0.0,
    ],
    secular_var_coeff_s: [
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, -26.8, -15.646192295038858, 3.4292856398964493,
        -0.18973665961010275, 0.10327955589886445, 0.0, 0.1322875655532295,
        -0.049999999999999996, -0.0298142396999972, 0.013483997249264842, 0.0,
        0.0, -3.8393792901110113, -0.051639777949432225, 0.39503867602496284,
        0.07807200583588267, -0.07590721152765897, 0.012858612496840992, 0.005976143046671968,
        -0.0015891043154093204, -0.001297498240269205, 0.0010795837927188264, 0.0,
        0.12122064363978786, 0.05976143046671968, -0.010956262252231943, -0.0040253824294970665,
        -0.000727392967453308, 0.0007356123579206246, -0.0003467709910735329, 0.0,
        0.0, -7.44983593779457e-05, -0.03732764625050948, 0.007747247335011402,
        0.00010499013139145201, -5.482930791331409e-05, 0.00018993429409939658, 1.96320414650061e-05,
        0.0, 8.77971585056964e-06, 0.0, 7.423923386456234e-05,
        0.00022383971222927231, -6.396752589886643e-05, -4.38985792528482e-06, 2.346477761861439e-06,
        -2.7094791349163448e-06, 0.0, 0.0, 8.400204677208417e-05,
        1.7921519933767679e-06, -1.3547395674581724e-06, 0.0, 1.5146448823225676e-07,
        0.0, 0.0, 4.789727674457019e-07, 3.7101071032081634e-07,
        -8.744806305356236e-08, -1.836776716210935e-08, 8.658648477055405e-09, 0.0,
        0.0, 2.999443817427769e-08, -4.999073029046282e-09, 0.0,
        0.0, 5.302317657728099e-09, 4.054783655541767e-10, -1.282235177073561e-10,
        0.0, -9.066771887846485e-11, 0.0, 0.0,
        -4.218244040462945e-12, 0.0, 0.0,
    ],
};
